//! Actions for the lookup page

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sprite::SpriteImage;
use crate::state::{CreatureDetail, CreatureSummary, FallbackStage, FocusArea};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: load the index and run the initial lookup, if any
    Init,

    // ===== Search =====
    /// Search field text changed
    SearchQueryChange(String),

    /// Lookup requested for the raw field text
    SearchSubmit(String),

    // ===== Lookup results =====
    LookupDidLoad {
        term: String,
        detail: CreatureDetail,
    },

    LookupDidError {
        term: String,
        error: String,
    },

    // ===== Detail panel =====
    DetailSpriteDidLoad {
        url: String,
        sprite: SpriteImage,
    },

    DetailSpriteDidError {
        url: String,
        error: String,
    },

    /// Hide the panel without clearing its contents
    DetailClose,

    // ===== Gallery =====
    /// (Re)fetch the index listing
    GalleryLoad,

    GalleryDidLoad(Vec<CreatureSummary>),

    GalleryDidError(String),

    /// Move the selection by tiles
    GalleryMove(i32),

    /// Move the selection by grid rows
    GalleryRowMove(i32),

    GallerySelect(usize),

    /// Search for the selected tile
    GalleryActivate,

    TileSpriteDidLoad {
        index: usize,
        name: String,
        stage: FallbackStage,
        sprite: SpriteImage,
    },

    TileSpriteDidError {
        index: usize,
        name: String,
        stage: FallbackStage,
        error: String,
    },

    // ===== Accordion =====
    AccordionToggle,

    // ===== Alert =====
    AlertDismiss,

    // ===== UI =====
    UiTerminalResize(u16, u16),

    UiFocusNext,

    UiFocusPrev,

    UiFocusSet(FocusArea),

    /// Force a re-render (cursor movement)
    Render,

    Quit,
}
