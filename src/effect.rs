//! Effects - side effects declared by the reducer

use crate::state::FallbackStage;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch one creature record
    LookupCreature { term: String, url: String },
    /// Fetch the index listing for the gallery
    LoadIndex { url: String },
    /// Fetch and decode the detail panel image
    LoadDetailSprite { url: String },
    /// Fetch and decode a gallery tile image at the given fallback stage
    LoadTileSprite {
        index: usize,
        name: String,
        stage: FallbackStage,
        url: String,
    },
}
