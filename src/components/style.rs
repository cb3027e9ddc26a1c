//! Shared palette and small style helpers.

use ratatui::style::{Color, Modifier, Style};

pub const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub const ACCENT_RED: Color = Color::Rgb(227, 53, 13);
pub const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
pub const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub const HIDDEN_ABILITY: Color = Color::Rgb(160, 64, 160);

pub fn focus_border(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}

pub fn type_color(kind: &str) -> (u8, u8, u8) {
    match kind.to_lowercase().as_str() {
        "normal" => (168, 168, 120),
        "fire" => (240, 128, 48),
        "water" => (104, 144, 240),
        "grass" => (120, 200, 80),
        "electric" => (248, 208, 48),
        "ice" => (152, 216, 216),
        "fighting" => (192, 48, 40),
        "poison" => (160, 64, 160),
        "ground" => (224, 192, 104),
        "flying" => (168, 144, 240),
        "psychic" => (248, 88, 136),
        "bug" => (168, 184, 32),
        "rock" => (184, 160, 56),
        "ghost" => (112, 88, 152),
        "dragon" => (112, 56, 248),
        "dark" => (112, 88, 72),
        "steel" => (184, 184, 208),
        "fairy" => (238, 153, 172),
        _ => (200, 200, 200),
    }
}

/// Badge style for a type: type color background, black or white text by luminance.
pub fn type_badge(kind: &str) -> Style {
    let (r, g, b) = type_color(kind);
    let lum = 0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32;
    let fg = if lum > 160.0 { Color::Black } else { Color::White };
    Style::default()
        .bg(Color::Rgb(r, g, b))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_text_contrasts_with_background() {
        assert_eq!(type_badge("electric").fg, Some(Color::Black));
        assert_eq!(type_badge("ghost").fg, Some(Color::White));
        assert_eq!(type_badge("FIRE").bg, Some(Color::Rgb(240, 128, 48)));
        assert_eq!(type_color("shadow"), (200, 200, 200));
    }
}
