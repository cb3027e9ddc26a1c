//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::detail::DetailView;
use crate::layout::{GridMetrics, PageLayout};
use crate::sprite::SpriteImage;

pub const DEFAULT_API_BASE: &str = "https://pokeapi-proxy.freecodecamp.rocks/api/pokemon";
pub const DEFAULT_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

pub const EMPTY_TERM_ALERT: &str = "Please enter a Pokémon name or ID";
pub const NOT_FOUND_ALERT: &str = "Pokémon not found";
pub const INDEX_LOAD_FAILED: &str = "Failed to load Pokémon list. Please refresh the page.";
pub const PLACEHOLDER_GLYPH: &str = "⭐";

/// Where creature records and sprite assets are fetched from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Endpoints {
    pub api_base: String,
    pub sprite_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sprite_base: DEFAULT_SPRITE_BASE.to_string(),
        }
    }
}

impl Endpoints {
    pub fn index_url(&self) -> String {
        self.api_base.trim_end_matches('/').to_string()
    }

    pub fn lookup_url(&self, term: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(term)
        )
    }

    /// Sprite URL for a gallery tile at the given fallback stage.
    /// `Placeholder` has no URL.
    pub fn tile_sprite_url(&self, id: &str, stage: FallbackStage) -> Option<String> {
        let base = self.sprite_base.trim_end_matches('/');
        match stage {
            FallbackStage::Primary => Some(format!("{base}/{id}.png")),
            FallbackStage::Secondary => Some(format!("{base}/other/official-artwork/{id}.png")),
            FallbackStage::Placeholder => None,
        }
    }
}

/// One entry of the index listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureSummary {
    pub name: String,
    pub url: String,
}

impl CreatureSummary {
    /// Last non-empty path segment of the entry URL.
    pub fn id(&self) -> Option<String> {
        self.url
            .split('/')
            .filter(|segment| !segment.is_empty())
            .last()
            .map(str::to_string)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteSet {
    pub official_artwork: Option<String>,
    pub dream_world: Option<String>,
    pub home: Option<String>,
    pub front_default: Option<String>,
}

impl SpriteSet {
    /// Highest quality image available: official artwork, dream world,
    /// home, then the default front sprite. Empty strings count as missing.
    pub fn best(&self) -> Option<&str> {
        [
            &self.official_artwork,
            &self.dream_world,
            &self.home,
            &self.front_default,
        ]
        .into_iter()
        .filter_map(|url| url.as_deref())
        .find(|url| !url.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u32,
}

/// A single creature record as returned by the lookup endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    /// Hectograms
    pub weight: u32,
    /// Decimeters
    pub height: u32,
    pub base_experience: Option<u32>,
    pub order: Option<i32>,
    pub sprites: SpriteSet,
    pub abilities: Vec<Ability>,
    pub stats: Vec<StatEntry>,
    pub types: Vec<String>,
}

/// Which image a gallery tile is currently trying to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FallbackStage {
    Primary,
    Secondary,
    Placeholder,
}

impl FallbackStage {
    pub fn next(self) -> Self {
        match self {
            FallbackStage::Primary => FallbackStage::Secondary,
            FallbackStage::Secondary | FallbackStage::Placeholder => FallbackStage::Placeholder,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TileSprite {
    pub stage: FallbackStage,
    pub requested: bool,
    pub image: Option<SpriteImage>,
}

impl TileSprite {
    fn for_id(id: Option<&str>) -> Self {
        let stage = match id {
            Some(_) => FallbackStage::Primary,
            None => FallbackStage::Placeholder,
        };
        Self {
            stage,
            requested: false,
            image: None,
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.stage == FallbackStage::Placeholder
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GalleryTile {
    pub name: String,
    pub id: Option<String>,
    pub sprite: TileSprite,
}

impl GalleryTile {
    pub fn from_summary(summary: CreatureSummary) -> Self {
        let id = summary.id();
        let sprite = TileSprite::for_id(id.as_deref());
        Self {
            name: summary.name,
            id,
            sprite,
        }
    }

    pub fn hint(&self) -> String {
        format!("Click to search for {}", self.name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FocusArea {
    #[default]
    Search,
    SearchButton,
    Detail,
    Accordion,
    Gallery,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Config", label = "Endpoints", debug_fmt)]
    pub endpoints: Endpoints,

    #[debug(section = "Search", label = "Query")]
    pub search_query: String,

    #[debug(section = "Search", label = "In flight")]
    pub lookups_in_flight: u32,

    #[debug(section = "Detail", label = "Visible")]
    pub detail_visible: bool,

    #[debug(section = "Detail", label = "View", debug_fmt)]
    pub detail: Option<DetailView>,

    #[debug(skip)]
    pub detail_sprite: DataResource<SpriteImage>,

    #[debug(section = "Gallery", label = "Expanded")]
    pub gallery_expanded: bool,

    #[debug(skip)]
    pub gallery: DataResource<Vec<GalleryTile>>,

    #[debug(section = "Gallery", label = "Selected")]
    pub gallery_selected: usize,

    #[debug(section = "Gallery", label = "Scroll row")]
    pub gallery_scroll: usize,

    #[debug(section = "UI", label = "Focus", debug_fmt)]
    pub focus: FocusArea,

    #[debug(section = "UI", label = "Alert", debug_fmt)]
    pub alert: Option<String>,

    #[debug(skip)]
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            search_query: String::new(),
            lookups_in_flight: 0,
            detail_visible: false,
            detail: None,
            detail_sprite: DataResource::Empty,
            gallery_expanded: false,
            gallery: DataResource::Empty,
            gallery_selected: 0,
            gallery_scroll: 0,
            focus: FocusArea::Search,
            alert: None,
            terminal_size: (80, 24),
        }
    }

    pub fn tiles(&self) -> &[GalleryTile] {
        self.gallery.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_tile(&self) -> Option<&GalleryTile> {
        self.tiles().get(self.gallery_selected)
    }

    pub fn page_layout(&self) -> PageLayout {
        let (width, height) = self.terminal_size;
        PageLayout::compute(
            ratatui::layout::Rect::new(0, 0, width, height),
            self.detail_visible,
            self.gallery_expanded,
        )
    }

    /// Grid dimensions of the gallery at the current terminal size, or
    /// `None` while the accordion is collapsed.
    pub fn gallery_metrics(&self) -> Option<GridMetrics> {
        self.page_layout().gallery.map(GridMetrics::for_area)
    }

    /// Indices of tiles inside the visible grid window.
    pub fn visible_tile_range(&self) -> std::ops::Range<usize> {
        let Some(metrics) = self.gallery_metrics() else {
            return 0..0;
        };
        let len = self.tiles().len();
        let start = (self.gallery_scroll * metrics.columns).min(len);
        let end = (start + metrics.columns * metrics.rows).min(len);
        start..end
    }

    pub fn focus_order(&self) -> Vec<FocusArea> {
        let mut order = vec![FocusArea::Search, FocusArea::SearchButton];
        if self.detail_visible {
            order.push(FocusArea::Detail);
        }
        order.push(FocusArea::Accordion);
        if self.gallery_expanded {
            order.push(FocusArea::Gallery);
        }
        order
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(&self.focus_order(), self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(&self.focus_order(), self.focus, -1);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}

fn cycle(order: &[FocusArea], current: FocusArea, step: isize) -> FocusArea {
    let len = order.len() as isize;
    let index = order
        .iter()
        .position(|area| *area == current)
        .unwrap_or(0) as isize;
    order[(index + step).rem_euclid(len) as usize]
}
