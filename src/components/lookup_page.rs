//! Whole-page view: owns the child components and routes keys by focus.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps,
    StatusBarSection, StatusBarStyle,
};

use super::style::{ACCENT_GOLD, ACCENT_RED, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use super::{
    AccordionHeader, AccordionHeaderProps, AlertDialog, AlertProps, Component, DetailPanel,
    DetailPanelProps, Gallery, GalleryProps, SearchBar, SearchBarProps,
};
use crate::action::Action;
use crate::state::{AppState, FocusArea};

pub const APP_TITLE: &str = "Pokédex Lookup";

pub struct LookupPageProps<'a> {
    pub state: &'a AppState,
}

pub struct LookupPage {
    search: SearchBar,
    detail: DetailPanel,
    accordion: AccordionHeader,
    gallery: Gallery,
    alert: AlertDialog,
    status_bar: StatusBar,
}

impl Default for LookupPage {
    fn default() -> Self {
        Self {
            search: SearchBar::new(),
            detail: DetailPanel,
            accordion: AccordionHeader,
            gallery: Gallery,
            alert: AlertDialog::new(),
            status_bar: StatusBar::new(),
        }
    }
}

impl LookupPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn route_to_focus(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        match state.focus {
            FocusArea::Search | FocusArea::SearchButton => self
                .search
                .handle_event(event, search_props(state))
                .into_iter()
                .collect(),
            FocusArea::Detail => match state.detail.as_ref() {
                Some(view) if state.detail_visible => self
                    .detail
                    .handle_event(
                        event,
                        DetailPanelProps {
                            view,
                            sprite: &state.detail_sprite,
                            is_focused: true,
                        },
                    )
                    .into_iter()
                    .collect(),
                _ => Vec::new(),
            },
            FocusArea::Accordion => self
                .accordion
                .handle_event(event, accordion_props(state))
                .into_iter()
                .collect(),
            FocusArea::Gallery => self
                .gallery
                .handle_event(event, gallery_props(state))
                .into_iter()
                .collect(),
        }
    }
}

impl Component<Action> for LookupPage {
    type Props<'a> = LookupPageProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return vec![Action::Quit];
            }
        }

        if let Some(message) = state.alert.as_deref() {
            return self
                .alert
                .handle_event(
                    event,
                    AlertProps {
                        message,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect::<Vec<_>>();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Tab => return vec![Action::UiFocusNext],
                KeyCode::BackTab => return vec![Action::UiFocusPrev],
                _ => {}
            }
        }

        let actions = self.route_to_focus(event, state);
        if !actions.is_empty() {
            return actions;
        }

        // Unclaimed keys outside the text field.
        match event {
            EventKind::Key(key)
                if state.focus != FocusArea::Search
                    && key.code == KeyCode::Char('q')
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                vec![Action::Quit]
            }
            EventKind::Key(key) if key.code == KeyCode::Char('/') => {
                vec![Action::UiFocusSet(FocusArea::Search)]
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let layout = crate::layout::PageLayout::compute(
            area,
            state.detail_visible,
            state.gallery_expanded,
        );

        render_header(frame, layout.header, state);

        self.search.render(frame, layout.search, search_props(state));

        if let (Some(detail_area), Some(view)) = (layout.detail, state.detail.as_ref()) {
            self.detail.render(
                frame,
                detail_area,
                DetailPanelProps {
                    view,
                    sprite: &state.detail_sprite,
                    is_focused: state.focus == FocusArea::Detail,
                },
            );
        }

        self.accordion
            .render(frame, layout.accordion_header, accordion_props(state));

        if let Some(gallery_area) = layout.gallery {
            self.gallery
                .render(frame, gallery_area, gallery_props(state));
        }

        render_status(&mut self.status_bar, frame, layout.status, state);

        if let Some(message) = state.alert.as_deref() {
            self.alert.render(
                frame,
                area,
                AlertProps {
                    message,
                    is_focused: true,
                },
            );
        }
    }
}

fn search_props(state: &AppState) -> SearchBarProps<'_> {
    SearchBarProps {
        query: &state.search_query,
        input_focused: state.focus == FocusArea::Search,
        button_focused: state.focus == FocusArea::SearchButton,
        busy: state.lookups_in_flight > 0,
        on_change: Action::SearchQueryChange,
        on_submit: Action::SearchSubmit,
    }
}

fn accordion_props(state: &AppState) -> AccordionHeaderProps {
    AccordionHeaderProps {
        expanded: state.gallery_expanded,
        count: state.gallery.data().map(Vec::len),
        is_focused: state.focus == FocusArea::Accordion,
    }
}

fn gallery_props(state: &AppState) -> GalleryProps<'_> {
    GalleryProps {
        gallery: &state.gallery,
        selected: state.gallery_selected,
        scroll: state.gallery_scroll,
        page_rows: state
            .gallery_metrics()
            .map(|metrics| metrics.rows)
            .unwrap_or(1),
        is_focused: state.focus == FocusArea::Gallery,
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        APP_TITLE,
        Style::default()
            .fg(ACCENT_RED)
            .add_modifier(Modifier::BOLD),
    )];
    if state.lookups_in_flight > 0 {
        spans.push(Span::styled(
            "  searching...",
            Style::default().fg(ACCENT_GOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

fn render_status(status_bar: &mut StatusBar, frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = status_hints(state);
    let status = state
        .selected_tile()
        .filter(|_| state.focus == FocusArea::Gallery)
        .map(|tile| tile.hint())
        .unwrap_or_default();
    let status_span = Span::styled(status.as_str(), Style::default().fg(ACCENT_GOLD));
    let status_items = [StatusBarItem::span(status_span)];

    let style = StatusBarStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
        text: Style::default().fg(TEXT_DIM),
        hint_key: Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD),
        hint_label: Style::default().fg(TEXT_DIM),
        separator: Style::default().fg(TEXT_DIM),
    };

    let props = StatusBarProps {
        left: StatusBarSection::hints(&hints).with_separator("  "),
        center: StatusBarSection::empty(),
        right: StatusBarSection::items(&status_items).with_separator("  "),
        style,
        is_focused: false,
    };
    Component::<Action>::render(status_bar, frame, area, props);
}

fn status_hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
    if state.alert.is_some() {
        return vec![StatusBarHint::new("Enter", "OK")];
    }
    let mut hints = vec![StatusBarHint::new("Tab", "Next")];
    match state.focus {
        FocusArea::Search => {
            hints.push(StatusBarHint::new("Enter", "Search"));
            hints.push(StatusBarHint::new("Ctrl-C", "Quit"));
            return hints;
        }
        FocusArea::SearchButton => hints.push(StatusBarHint::new("Enter", "Search")),
        FocusArea::Detail => hints.push(StatusBarHint::new("x", "Close")),
        FocusArea::Accordion => hints.push(StatusBarHint::new("Enter", "Toggle")),
        FocusArea::Gallery => {
            hints.push(StatusBarHint::new("Arrows", "Move"));
            hints.push(StatusBarHint::new("Enter", "Search"));
            hints.push(StatusBarHint::new("r", "Reload"));
        }
    }
    hints.push(StatusBarHint::new("q", "Quit"));
    hints
}
