//! Page geometry shared by the renderer and the reducer.
//!
//! The reducer needs the gallery grid size to move the selection by rows
//! and to decide which tile sprites are on screen, so the split lives here
//! instead of inside the components.

use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 1;
pub const SEARCH_HEIGHT: u16 = 3;
pub const DETAIL_HEIGHT: u16 = 16;
pub const ACCORDION_HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;

/// Tile footprint in cells, border included.
pub const TILE_WIDTH: u16 = 14;
pub const TILE_HEIGHT: u16 = 7;

/// Sprite bounds in pixels. Half-block rendering packs two pixel rows per cell.
pub const TILE_SPRITE_PX: (u32, u32) = (10, 8);
pub const DETAIL_SPRITE_PX: (u32, u32) = (28, 26);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub search: Rect,
    pub detail: Option<Rect>,
    pub accordion_header: Rect,
    pub gallery: Option<Rect>,
    pub status: Rect,
}

impl PageLayout {
    pub fn compute(area: Rect, detail_visible: bool, gallery_expanded: bool) -> Self {
        let mut constraints = vec![
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
        ];
        if detail_visible {
            constraints.push(Constraint::Length(DETAIL_HEIGHT));
        }
        constraints.push(Constraint::Length(ACCORDION_HEADER_HEIGHT));
        // Gallery when expanded, filler otherwise.
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(STATUS_HEIGHT));

        let chunks = Layout::vertical(constraints).split(area);
        let mut index = 0;
        let mut next = || {
            let rect = chunks[index];
            index += 1;
            rect
        };

        let header = next();
        let search = next();
        let detail = if detail_visible { Some(next()) } else { None };
        let accordion_header = next();
        let body = next();
        let status = next();

        Self {
            header,
            search,
            detail,
            accordion_header,
            gallery: gallery_expanded.then_some(body),
            status,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: usize,
    pub rows: usize,
}

impl GridMetrics {
    /// Grid that fits inside a bordered gallery area. Always at least 1x1.
    pub fn for_area(area: Rect) -> Self {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        Self {
            columns: (inner_width / TILE_WIDTH).max(1) as usize,
            rows: (inner_height / TILE_HEIGHT).max(1) as usize,
        }
    }

    pub fn page_len(&self) -> usize {
        self.columns * self.rows
    }
}
