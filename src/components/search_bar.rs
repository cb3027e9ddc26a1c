use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use super::style::{ACCENT_RED, ACCENT_TEAL, TEXT_DIM, TEXT_MAIN, focus_border};
use crate::action::Action;

pub const SEARCH_PLACEHOLDER: &str = "Enter Pokémon name or ID";
const BUTTON_WIDTH: u16 = 12;

/// Search field plus its submit button.
pub struct SearchBar {
    input: TextInput,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub input_focused: bool,
    pub button_focused: bool,
    pub busy: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_style() -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: Some(BorderStyle {
                    borders: Borders::ALL,
                    style: Style::default().fg(TEXT_DIM),
                    focused_style: Some(focus_border(true)),
                }),
                padding: Padding::xy(1, 0),
                bg: None,
                fg: Some(TEXT_MAIN),
            },
            placeholder_style: Some(Style::default().fg(TEXT_DIM)),
            cursor_style: None,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if props.button_focused {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    vec![(props.on_submit)(props.query.to_string())]
                }
                _ => Vec::new(),
            };
        }

        if !props.input_focused {
            return Vec::new();
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [input_area, button_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
                .areas(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: props.input_focused,
            style: Self::input_style(),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, input_area, input_props);

        let label = if props.busy { "Searching" } else { "Search" };
        let button_style = if props.button_focused {
            Style::default()
                .fg(ACCENT_RED)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(button_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_border(props.button_focused)),
            );
        frame.render_widget(button, button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn press(code: KeyCode) -> EventKind {
        EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn props(query: &str, input_focused: bool, button_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            query,
            input_focused,
            button_focused,
            busy: false,
            on_change: Action::SearchQueryChange,
            on_submit: Action::SearchSubmit,
        }
    }

    #[test]
    fn enter_in_field_submits_query() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&press(KeyCode::Enter), props("Pikachu", true, false))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchSubmit("Pikachu".into()));
    }

    #[test]
    fn typing_changes_query() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("a")), props("", true, false))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchQueryChange("a".into()));
    }

    #[test]
    fn button_submits_on_enter_and_space() {
        let mut bar = SearchBar::new();
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            let actions: Vec<_> = bar
                .handle_event(&press(code), props("eevee", false, true))
                .into_iter()
                .collect();
            actions.assert_first(Action::SearchSubmit("eevee".into()));
        }
    }

    #[test]
    fn unfocused_bar_ignores_keys() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("a")), props("", false, false))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn renders_placeholder_and_button() {
        let mut render = RenderHarness::new(60, 3);
        let mut bar = SearchBar::new();
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("", false, false));
        });
        assert!(output.contains(SEARCH_PLACEHOLDER), "{output}");
        assert!(output.contains("Search"), "{output}");
    }
}
