//! Display values for the detail panel.
//!
//! `DetailView` is rebuilt from scratch for every loaded record; the panel
//! renders it without looking at the raw `CreatureDetail` again.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icons;
use crate::state::{Ability, CreatureDetail, StatEntry};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DetailError {
    #[error("expected 6 stats, got {0}")]
    MissingStats(usize),
}

/// The six base stats, read by position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub const LABELS: [&'static str; 6] = [
        "HP",
        "Attack",
        "Defense",
        "Sp. Atk",
        "Sp. Def",
        "Speed",
    ];

    /// Stat names are ignored; a reordered list is taken as-is.
    pub fn from_positional(stats: &[StatEntry]) -> Result<Self, DetailError> {
        let [hp, attack, defense, special_attack, special_defense, speed, ..] = stats else {
            return Err(DetailError::MissingStats(stats.len()));
        };
        Ok(Self {
            hp: hp.base_stat,
            attack: attack.base_stat,
            defense: defense.base_stat,
            special_attack: special_attack.base_stat,
            special_defense: special_defense.base_stat,
            speed: speed.base_stat,
        })
    }

    pub fn values(&self) -> [u32; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AbilityBadge {
    pub label: String,
    pub hidden: bool,
}

impl AbilityBadge {
    fn from_ability(ability: &Ability) -> Self {
        Self {
            label: ability.name.replacen('-', " ", 1),
            hidden: ability.is_hidden,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.hidden {
            "Hidden Ability"
        } else {
            "Normal Ability"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TypeBadge {
    pub label: String,
    /// Raw type name, used to pick the badge color.
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailView {
    pub name: String,
    pub display_name: String,
    pub icon: String,
    pub id_label: String,
    pub weight_label: String,
    pub height_label: String,
    pub base_experience: String,
    pub order: String,
    pub image_url: Option<String>,
    pub image_alt: String,
    pub abilities: Vec<AbilityBadge>,
    pub stats: BaseStats,
    pub types: Vec<TypeBadge>,
}

impl DetailView {
    pub fn from_detail(detail: &CreatureDetail) -> Result<Self, DetailError> {
        let stats = BaseStats::from_positional(&detail.stats)?;
        Ok(Self {
            name: detail.name.clone(),
            display_name: detail.name.to_uppercase(),
            icon: icons::icon_for(&detail.name).to_string(),
            id_label: format_id(detail.id),
            weight_label: format!("Weight: {} kg", tenths(detail.weight)),
            height_label: format!("Height: {} m", tenths(detail.height)),
            base_experience: or_not_available(detail.base_experience.map(i64::from)),
            order: or_not_available(detail.order.map(i64::from)),
            image_url: detail.sprites.best().map(str::to_string),
            image_alt: format!("{} official artwork", detail.name),
            abilities: detail
                .abilities
                .iter()
                .map(AbilityBadge::from_ability)
                .collect(),
            stats,
            types: detail
                .types
                .iter()
                .map(|kind| TypeBadge {
                    label: kind.to_uppercase(),
                    kind: kind.clone(),
                })
                .collect(),
        })
    }
}

pub fn format_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Hectograms to kilograms, decimeters to meters.
pub fn tenths(value: u32) -> String {
    format!("{:.1}", value as f64 / 10.0)
}

/// Missing and zero values both read as "N/A".
fn or_not_available(value: Option<i64>) -> String {
    match value {
        Some(value) if value != 0 => value.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SpriteSet;
    use pretty_assertions::assert_eq;

    fn stat(name: &str, value: u32) -> StatEntry {
        StatEntry {
            name: name.into(),
            base_stat: value,
        }
    }

    fn pikachu() -> CreatureDetail {
        CreatureDetail {
            id: 25,
            name: "pikachu".into(),
            weight: 60,
            height: 4,
            base_experience: Some(112),
            order: Some(35),
            sprites: SpriteSet {
                front_default: Some("front.png".into()),
                ..Default::default()
            },
            abilities: vec![
                Ability {
                    name: "static".into(),
                    is_hidden: false,
                },
                Ability {
                    name: "lightning-rod-x".into(),
                    is_hidden: true,
                },
            ],
            stats: vec![
                stat("hp", 35),
                stat("attack", 55),
                stat("defense", 40),
                stat("special-attack", 50),
                stat("special-defense", 50),
                stat("speed", 90),
            ],
            types: vec!["electric".into()],
        }
    }

    #[test]
    fn formats_basic_fields() {
        let view = DetailView::from_detail(&pikachu()).expect("view");
        assert_eq!(view.display_name, "PIKACHU");
        assert_eq!(view.id_label, "#025");
        assert_eq!(view.weight_label, "Weight: 6.0 kg");
        assert_eq!(view.height_label, "Height: 0.4 m");
        assert_eq!(view.base_experience, "112");
        assert_eq!(view.order, "35");
        assert_eq!(view.icon, "⚡");
        assert_eq!(view.image_url.as_deref(), Some("front.png"));
        assert_eq!(view.image_alt, "pikachu official artwork");
    }

    #[test]
    fn converts_hundred_to_ten() {
        let mut detail = pikachu();
        detail.weight = 100;
        detail.height = 100;
        let view = DetailView::from_detail(&detail).expect("view");
        assert_eq!(view.weight_label, "Weight: 10.0 kg");
        assert_eq!(view.height_label, "Height: 10.0 m");
    }

    #[test]
    fn id_padding_keeps_long_ids() {
        assert_eq!(format_id(1), "#001");
        assert_eq!(format_id(151), "#151");
        assert_eq!(format_id(1025), "#1025");
    }

    #[test]
    fn missing_or_zero_optionals_are_not_available() {
        let mut detail = pikachu();
        detail.base_experience = None;
        detail.order = Some(0);
        let view = DetailView::from_detail(&detail).expect("view");
        assert_eq!(view.base_experience, NOT_AVAILABLE);
        assert_eq!(view.order, NOT_AVAILABLE);

        detail.order = Some(-1);
        let view = DetailView::from_detail(&detail).expect("view");
        assert_eq!(view.order, "-1");
    }

    #[test]
    fn abilities_replace_first_dash_and_tag_hidden() {
        let view = DetailView::from_detail(&pikachu()).expect("view");
        assert_eq!(
            view.abilities,
            vec![
                AbilityBadge {
                    label: "static".into(),
                    hidden: false,
                },
                AbilityBadge {
                    label: "lightning rod-x".into(),
                    hidden: true,
                },
            ]
        );
        assert_eq!(view.abilities[0].title(), "Normal Ability");
        assert_eq!(view.abilities[1].title(), "Hidden Ability");
    }

    #[test]
    fn types_are_uppercase_badges() {
        let mut detail = pikachu();
        detail.types = vec!["grass".into(), "poison".into()];
        let view = DetailView::from_detail(&detail).expect("view");
        let labels: Vec<_> = view.types.iter().map(|badge| badge.label.as_str()).collect();
        assert_eq!(labels, vec!["GRASS", "POISON"]);
        assert_eq!(view.types[1].kind, "poison");
    }

    #[test]
    fn stats_are_read_by_position() {
        let mut detail = pikachu();
        detail.stats.swap(0, 5);
        let view = DetailView::from_detail(&detail).expect("view");
        assert_eq!(view.stats.hp, 90);
        assert_eq!(view.stats.speed, 35);
    }

    #[test]
    fn too_few_stats_is_an_error() {
        let mut detail = pikachu();
        detail.stats.truncate(5);
        assert_eq!(
            DetailView::from_detail(&detail),
            Err(DetailError::MissingStats(5))
        );
    }

    #[test]
    fn no_sprite_means_no_image() {
        let mut detail = pikachu();
        detail.sprites = SpriteSet::default();
        let view = DetailView::from_detail(&detail).expect("view");
        assert_eq!(view.image_url, None);
    }
}
