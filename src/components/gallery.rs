use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_dispatch::{DataResource, EventKind};

use super::Component;
use super::style::{ACCENT_GOLD, ACCENT_RED, TEXT_DIM, TEXT_MAIN, focus_border};
use crate::action::Action;
use crate::layout::{GridMetrics, TILE_HEIGHT, TILE_WIDTH};
use crate::sprite::SpriteWidget;
use crate::state::{GalleryTile, INDEX_LOAD_FAILED, PLACEHOLDER_GLYPH};

pub const LOADING_TEXT: &str = "Loading Pokémon...";

pub struct GalleryProps<'a> {
    pub gallery: &'a DataResource<Vec<GalleryTile>>,
    pub selected: usize,
    /// First visible grid row.
    pub scroll: usize,
    /// Rows per page, for PageUp/PageDown.
    pub page_rows: usize,
    pub is_focused: bool,
}

/// Grid of creature tiles inside the accordion.
#[derive(Default)]
pub struct Gallery;

impl Component<Action> for Gallery {
    type Props<'a> = GalleryProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        let page = props.page_rows.max(1) as i32;
        let last = props.gallery.data().map(Vec::len).unwrap_or(0);
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::GalleryMove(-1)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::GalleryMove(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::GalleryRowMove(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::GalleryRowMove(1)),
            KeyCode::PageUp => Some(Action::GalleryRowMove(-page)),
            KeyCode::PageDown => Some(Action::GalleryRowMove(page)),
            KeyCode::Home => Some(Action::GallerySelect(0)),
            KeyCode::End if last > 0 => Some(Action::GallerySelect(last - 1)),
            KeyCode::Enter => Some(Action::GalleryActivate),
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::GalleryLoad),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(props.is_focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tiles = match props.gallery {
            DataResource::Loaded(tiles) => tiles,
            DataResource::Loading => {
                render_message(frame, inner, LOADING_TEXT, TEXT_DIM);
                return;
            }
            DataResource::Failed(_) => {
                render_message(frame, inner, INDEX_LOAD_FAILED, ACCENT_RED);
                return;
            }
            DataResource::Empty => return,
        };

        let metrics = GridMetrics::for_area(area);
        let start = (props.scroll * metrics.columns).min(tiles.len());
        let end = (start + metrics.page_len()).min(tiles.len());
        for (offset, tile) in tiles[start..end].iter().enumerate() {
            let index = start + offset;
            let col = (offset % metrics.columns) as u16;
            let row = (offset / metrics.columns) as u16;
            let tile_area = Rect::new(
                inner.x + col * TILE_WIDTH,
                inner.y + row * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            )
            .intersection(inner);
            render_tile(frame, tile_area, tile, index == props.selected);
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
    let [_, line, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color)),
        line,
    );
}

fn render_tile(frame: &mut Frame, area: Rect, tile: &GalleryTile, selected: bool) {
    let border_style = if selected {
        Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [sprite_area, name_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    if tile.sprite.shows_placeholder() {
        let [_, glyph_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(sprite_area);
        frame.render_widget(
            Paragraph::new(PLACEHOLDER_GLYPH).alignment(Alignment::Center),
            glyph_area,
        );
    } else if let Some(sprite) = &tile.sprite.image {
        frame.render_widget(SpriteWidget::new(sprite), sprite_area);
    }

    let name_style = if selected {
        Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MAIN)
    };
    frame.render_widget(
        Paragraph::new(tile.name.as_str())
            .alignment(Alignment::Center)
            .style(name_style),
        name_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CreatureSummary, FallbackStage};
    use tui_dispatch::testing::*;

    fn tiles(names: &[&str]) -> Vec<GalleryTile> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                GalleryTile::from_summary(CreatureSummary {
                    name: name.to_string(),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
                })
            })
            .collect()
    }

    fn render(gallery: &DataResource<Vec<GalleryTile>>) -> String {
        let mut harness = RenderHarness::new(60, 16);
        let mut component = Gallery;
        harness.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                GalleryProps {
                    gallery,
                    selected: 0,
                    scroll: 0,
                    page_rows: 2,
                    is_focused: true,
                },
            );
        })
    }

    #[test]
    fn failed_index_shows_one_message_and_no_tiles() {
        let output = render(&DataResource::Failed("boom".into()));
        assert_eq!(
            output.matches("Failed to load Pokémon list.").count(),
            1,
            "{output}"
        );
        assert!(!output.contains(PLACEHOLDER_GLYPH));
    }

    #[test]
    fn tiles_show_names_in_order() {
        let output = render(&DataResource::Loaded(tiles(&[
            "bulbasaur",
            "ivysaur",
            "venusaur",
        ])));
        let first = output.find("bulbasaur").expect("bulbasaur");
        let second = output.find("ivysaur").expect("ivysaur");
        assert!(first < second);
        assert!(output.contains("venusaur"));
    }

    #[test]
    fn placeholder_tile_shows_a_single_glyph() {
        let mut loaded = tiles(&["missingno"]);
        loaded[0].sprite.stage = FallbackStage::Placeholder;
        let output = render(&DataResource::Loaded(loaded));
        assert_eq!(output.matches(PLACEHOLDER_GLYPH).count(), 1, "{output}");
    }

    #[test]
    fn keys_map_to_gallery_actions() {
        let mut component = Gallery;
        let gallery = DataResource::Loaded(tiles(&["a", "b"]));
        let mut actions = Vec::new();
        for k in ["r", "l", "x"] {
            actions.extend(component.handle_event(
                &EventKind::Key(key(k)),
                GalleryProps {
                    gallery: &gallery,
                    selected: 0,
                    scroll: 0,
                    page_rows: 2,
                    is_focused: true,
                },
            ));
        }
        assert_eq!(actions, vec![Action::GalleryLoad, Action::GalleryMove(1)]);
    }
}
