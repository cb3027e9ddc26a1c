use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, centered_rect,
};

use super::Component;
use super::style::{ACCENT_GOLD, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;

const ALERT_WIDTH: u16 = 48;
const ALERT_HEIGHT: u16 = 7;

pub struct AlertProps<'a> {
    pub message: &'a str,
    pub is_focused: bool,
}

/// Blocking message dialog. Owns the keyboard while open.
pub struct AlertDialog {
    modal: Modal,
}

impl Default for AlertDialog {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl AlertDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for AlertDialog {
    type Props<'a> = AlertProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::AlertDismiss),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let modal_area = centered_rect(
            ALERT_WIDTH.min(area.width),
            ALERT_HEIGHT.min(area.height),
            area,
        );
        let message = props.message;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let [body, hint] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(content_area);
            frame.render_widget(
                Paragraph::new(Line::from(message))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .style(
                        Style::default()
                            .fg(ACCENT_GOLD)
                            .add_modifier(Modifier::BOLD),
                    ),
                body,
            );
            frame.render_widget(
                Paragraph::new("[ OK ]")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(TEXT_DIM)),
                hint,
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(BG_PANEL),
                        padding: Padding::xy(2, 1),
                        border: None,
                        fg: Some(TEXT_MAIN),
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::AlertDismiss,
                render_content: &mut render_content,
            },
        );
    }
}
