use artbox::{Alignment as ArtAlignment, Renderer, fonts, integrations::ratatui::ArtBox};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_dispatch::{DataResource, EventKind};

use super::Component;
use super::style::{
    ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, HIDDEN_ABILITY, TEXT_DIM, TEXT_MAIN, focus_border,
    type_badge,
};
use crate::action::Action;
use crate::detail::{BaseStats, DetailView};
use crate::sprite::{SpriteImage, SpriteWidget};

const SPRITE_COLUMN: u16 = 30;
const STATS_COLUMN: u16 = 30;
/// Highest base stat in the games, used to scale the bars.
const STAT_CAP: u32 = 255;

pub struct DetailPanelProps<'a> {
    pub view: &'a DetailView,
    pub sprite: &'a DataResource<SpriteImage>,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct DetailPanel;

impl Component<Action> for DetailPanel {
    type Props<'a> = DetailPanelProps<'a>;

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
                KeyCode::Esc | KeyCode::Char('x') => Some(Action::DetailClose),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let view = props.view;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", view.id_label))
            .title_bottom(Line::from(" x close ").right_aligned())
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(focus_border(props.is_focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // No resolvable image: the sprite column is dropped entirely.
        let sprite_width = if view.image_url.is_some() {
            SPRITE_COLUMN
        } else {
            0
        };
        let [sprite_area, info_area, stats_area] = Layout::horizontal([
            Constraint::Length(sprite_width),
            Constraint::Min(20),
            Constraint::Length(STATS_COLUMN),
        ])
        .areas(inner);

        if view.image_url.is_some() {
            render_sprite(frame, sprite_area, view, props.sprite);
        }
        render_info(frame, info_area, view);
        render_stats(frame, stats_area, &view.stats);
    }
}

fn render_sprite(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    sprite: &DataResource<SpriteImage>,
) {
    let placeholder = match sprite {
        DataResource::Loaded(sprite) => {
            frame.render_widget(SpriteWidget::new(sprite), area);
            return;
        }
        DataResource::Loading => "Loading image...",
        DataResource::Failed(_) => view.image_alt.as_str(),
        DataResource::Empty => return,
    };
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .split(area);
    frame.render_widget(
        Paragraph::new(placeholder)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(TEXT_DIM)),
        rows[1],
    );
}

fn render_info(frame: &mut Frame, area: Rect, view: &DetailView) {
    let [art_area, title_area, size_area, extra_area, types_area, abilities_area] =
        Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

    let renderer = Renderer::new(fonts::stack(&["miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center);
    frame.render_widget(ArtBox::new(&renderer, &view.display_name), art_area);

    let title = Line::from(vec![
        Span::raw(format!("{} ", view.icon)),
        Span::styled(
            view.display_name.clone(),
            Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(view.id_label.clone(), Style::default().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    frame.render_widget(
        Paragraph::new(format!("{}   {}", view.weight_label, view.height_label)),
        size_area,
    );
    frame.render_widget(
        Paragraph::new(format!(
            "Base Exp: {}   Order: {}",
            view.base_experience, view.order
        )),
        extra_area,
    );

    let mut type_spans = Vec::with_capacity(view.types.len() * 2);
    for badge in &view.types {
        type_spans.push(Span::styled(
            format!(" {} ", badge.label),
            type_badge(&badge.kind),
        ));
        type_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(type_spans)), types_area);

    let mut ability_spans = vec![Span::styled("Abilities: ", Style::default().fg(TEXT_DIM))];
    for badge in &view.abilities {
        if badge.hidden {
            ability_spans.push(Span::styled(
                format!(" {} ", badge.label),
                Style::default()
                    .bg(HIDDEN_ABILITY)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::ITALIC),
            ));
            ability_spans.push(Span::styled(
                format!(" ({}) ", badge.title()),
                Style::default().fg(TEXT_DIM),
            ));
        } else {
            ability_spans.push(Span::styled(
                format!(" {} ", badge.label),
                Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
            ));
            ability_spans.push(Span::raw(" "));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(ability_spans)).wrap(Wrap { trim: true }),
        abilities_area,
    );
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &BaseStats) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Base Stats")
        .border_style(Style::default().fg(TEXT_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // "Sp. Atk " + " 123 "
    let bar_width = inner.width.saturating_sub(13) as u32;
    let lines: Vec<Line> = BaseStats::LABELS
        .iter()
        .zip(stats.values())
        .map(|(label, value)| {
            let filled = (value.min(STAT_CAP) * bar_width).div_ceil(STAT_CAP) as usize;
            Line::from(vec![
                Span::styled(format!("{label:<8}"), Style::default().fg(TEXT_DIM)),
                Span::styled(
                    format!("{value:>4} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(stat_color(value))),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn stat_color(value: u32) -> ratatui::style::Color {
    match value {
        0..=49 => ratatui::style::Color::Rgb(240, 128, 48),
        50..=89 => ACCENT_GOLD,
        _ => ACCENT_TEAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{AbilityBadge, TypeBadge};
    use tui_dispatch::testing::*;

    fn view(image_url: Option<&str>) -> DetailView {
        DetailView {
            name: "pikachu".into(),
            display_name: "PIKACHU".into(),
            icon: "⚡".into(),
            id_label: "#025".into(),
            weight_label: "Weight: 6.0 kg".into(),
            height_label: "Height: 0.4 m".into(),
            base_experience: "112".into(),
            order: "N/A".into(),
            image_url: image_url.map(str::to_string),
            image_alt: "pikachu official artwork".into(),
            abilities: vec![
                AbilityBadge {
                    label: "static".into(),
                    hidden: false,
                },
                AbilityBadge {
                    label: "lightning rod".into(),
                    hidden: true,
                },
            ],
            stats: BaseStats {
                hp: 35,
                attack: 55,
                defense: 40,
                special_attack: 50,
                special_defense: 50,
                speed: 90,
            },
            types: vec![TypeBadge {
                label: "ELECTRIC".into(),
                kind: "electric".into(),
            }],
        }
    }

    fn render(view: &DetailView, sprite: &DataResource<SpriteImage>) -> String {
        let mut harness = RenderHarness::new(110, 16);
        let mut panel = DetailPanel;
        harness.render_to_string_plain(|frame| {
            panel.render(
                frame,
                frame.area(),
                DetailPanelProps {
                    view,
                    sprite,
                    is_focused: false,
                },
            );
        })
    }

    #[test]
    fn renders_labels_badges_and_stats() {
        let output = render(&view(None), &DataResource::Empty);
        for expected in [
            "PIKACHU",
            "#025",
            "Weight: 6.0 kg",
            "Height: 0.4 m",
            "Base Exp: 112",
            "Order: N/A",
            "ELECTRIC",
            "static",
            "lightning rod",
            "Hidden Ability",
            "Sp. Atk",
            "Speed",
        ] {
            assert!(output.contains(expected), "missing {expected:?} in:\n{output}");
        }
    }

    #[test]
    fn failed_image_shows_alt_text() {
        let output = render(
            &view(Some("https://img/25.png")),
            &DataResource::Failed("404".into()),
        );
        assert!(output.contains("pikachu official artwork"), "{output}");
    }

    #[test]
    fn esc_closes_when_focused() {
        let mut panel = DetailPanel;
        let view = view(None);
        let sprite = DataResource::Empty;
        let actions: Vec<_> = panel
            .handle_event(
                &EventKind::Key(key("x")),
                DetailPanelProps {
                    view: &view,
                    sprite: &sprite,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::DetailClose);

        let actions: Vec<_> = panel
            .handle_event(
                &EventKind::Key(key("x")),
                DetailPanelProps {
                    view: &view,
                    sprite: &sprite,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }
}
