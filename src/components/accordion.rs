use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;

use super::Component;
use super::style::{ACCENT_GOLD, TEXT_DIM, TEXT_MAIN, focus_border};
use crate::action::Action;

pub const ACCORDION_TITLE: &str = "Available Pokémon";
pub const COLLAPSED_MARKER: &str = "▼";
pub const EXPANDED_MARKER: &str = "▲";

pub struct AccordionHeaderProps {
    pub expanded: bool,
    pub count: Option<usize>,
    pub is_focused: bool,
}

/// Header row of the collapsible gallery section.
#[derive(Default)]
pub struct AccordionHeader;

impl Component<Action> for AccordionHeader {
    type Props<'a> = AccordionHeaderProps;

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
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::AccordionToggle),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let marker = if props.expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };
        let mut spans = vec![Span::styled(
            ACCORDION_TITLE,
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
        )];
        if let Some(count) = props.count {
            spans.push(Span::styled(
                format!(" ({count})"),
                Style::default().fg(TEXT_DIM),
            ));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(marker, Style::default().fg(ACCENT_GOLD)));

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(props.is_focused)),
        );
        frame.render_widget(header, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    #[test]
    fn enter_toggles_when_focused() {
        let mut header = AccordionHeader;
        let enter = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let actions: Vec<_> = header
            .handle_event(
                &enter,
                AccordionHeaderProps {
                    expanded: false,
                    count: None,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::AccordionToggle);

        let actions: Vec<_> = header
            .handle_event(
                &enter,
                AccordionHeaderProps {
                    expanded: false,
                    count: None,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn marker_follows_expansion() {
        let mut render = RenderHarness::new(40, 3);
        let mut header = AccordionHeader;
        let collapsed = render.render_to_string_plain(|frame| {
            header.render(
                frame,
                frame.area(),
                AccordionHeaderProps {
                    expanded: false,
                    count: Some(151),
                    is_focused: false,
                },
            );
        });
        assert!(collapsed.contains("Available Pokémon (151) ▼"), "{collapsed}");

        let expanded = render.render_to_string_plain(|frame| {
            header.render(
                frame,
                frame.area(),
                AccordionHeaderProps {
                    expanded: true,
                    count: None,
                    is_focused: false,
                },
            );
        });
        assert!(expanded.contains("▲"), "{expanded}");
        assert!(!expanded.contains("▼"), "{expanded}");
    }
}
