//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::detail::DetailView;
use crate::effect::Effect;
use crate::state::{
    AppState, CreatureDetail, FallbackStage, FocusArea, GalleryTile, EMPTY_TERM_ALERT,
    NOT_FOUND_ALERT,
};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            let mut effects = vec![load_index(state)];
            if !state.search_query.trim().is_empty() {
                let query = state.search_query.clone();
                effects.extend(submit_lookup(state, &query));
            }
            DispatchResult::changed_with_many(effects)
        }

        // ===== Search =====
        Action::SearchQueryChange(query) => {
            if state.search_query == query {
                return DispatchResult::unchanged();
            }
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(query) => {
            state.search_query = query;
            let query = state.search_query.clone();
            match submit_lookup(state, &query) {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::changed(),
            }
        }

        // ===== Lookup results =====
        Action::LookupDidLoad { detail, .. } => {
            state.lookups_in_flight = state.lookups_in_flight.saturating_sub(1);
            with_effects(show_detail(state, &detail))
        }

        Action::LookupDidError { .. } => {
            state.lookups_in_flight = state.lookups_in_flight.saturating_sub(1);
            lookup_failed(state);
            DispatchResult::changed()
        }

        // ===== Detail panel =====
        Action::DetailSpriteDidLoad { url, sprite } => {
            if !is_current_image(state, &url) {
                return DispatchResult::unchanged();
            }
            state.detail_sprite = DataResource::Loaded(sprite);
            DispatchResult::changed()
        }

        Action::DetailSpriteDidError { url, error } => {
            if !is_current_image(state, &url) {
                return DispatchResult::unchanged();
            }
            state.detail_sprite = DataResource::Failed(error);
            DispatchResult::changed()
        }

        Action::DetailClose => {
            state.detail_visible = false;
            state.search_query.clear();
            state.focus = FocusArea::Search;
            DispatchResult::changed()
        }

        // ===== Gallery =====
        Action::GalleryLoad => DispatchResult::changed_with(load_index(state)),

        Action::GalleryDidLoad(entries) => {
            let tiles = entries.into_iter().map(GalleryTile::from_summary).collect();
            state.gallery = DataResource::Loaded(tiles);
            state.gallery_selected = 0;
            state.gallery_scroll = 0;
            with_effects(request_visible_sprites(state))
        }

        Action::GalleryDidError(error) => {
            state.gallery = DataResource::Failed(error);
            state.gallery_selected = 0;
            state.gallery_scroll = 0;
            DispatchResult::changed()
        }

        Action::GalleryMove(delta) => move_selection(state, delta),

        Action::GalleryRowMove(rows) => {
            let columns = state
                .gallery_metrics()
                .map(|metrics| metrics.columns)
                .unwrap_or(1) as i32;
            move_selection(state, rows.saturating_mul(columns))
        }

        Action::GallerySelect(index) => {
            if index >= state.tiles().len() || index == state.gallery_selected {
                return DispatchResult::unchanged();
            }
            state.gallery_selected = index;
            scroll_to_selection(state);
            with_effects(request_visible_sprites(state))
        }

        Action::GalleryActivate => {
            let Some(name) = state.selected_tile().map(|tile| tile.name.clone()) else {
                return DispatchResult::unchanged();
            };
            state.search_query = name.clone();
            state.focus = FocusArea::Search;
            match submit_lookup(state, &name) {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::changed(),
            }
        }

        Action::TileSpriteDidLoad {
            index,
            name,
            stage,
            sprite,
        } => {
            let Some(tile) = current_tile(state, index, &name, stage) else {
                return DispatchResult::unchanged();
            };
            tile.sprite.image = Some(sprite);
            DispatchResult::changed()
        }

        Action::TileSpriteDidError {
            index,
            name,
            stage,
            ..
        } => {
            if stage == FallbackStage::Placeholder {
                return DispatchResult::unchanged();
            }
            let Some(tile) = current_tile(state, index, &name, stage) else {
                return DispatchResult::unchanged();
            };
            tile.sprite.stage = stage.next();
            tile.sprite.image = None;
            tile.sprite.requested = false;
            with_effects(request_visible_sprites(state))
        }

        // ===== Accordion =====
        Action::AccordionToggle => {
            state.gallery_expanded = !state.gallery_expanded;
            if !state.gallery_expanded && state.focus == FocusArea::Gallery {
                state.focus = FocusArea::Accordion;
            }
            scroll_to_selection(state);
            with_effects(request_visible_sprites(state))
        }

        // ===== Alert =====
        Action::AlertDismiss => {
            if state.alert.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            scroll_to_selection(state);
            with_effects(request_visible_sprites(state))
        }

        Action::UiFocusNext => {
            state.focus_next();
            DispatchResult::changed()
        }

        Action::UiFocusPrev => {
            state.focus_prev();
            DispatchResult::changed()
        }

        Action::UiFocusSet(area) => {
            if state.focus == area || !state.focus_order().contains(&area) {
                return DispatchResult::unchanged();
            }
            state.focus = area;
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn with_effects(effects: Vec<Effect>) -> DispatchResult<Effect> {
    if effects.is_empty() {
        DispatchResult::changed()
    } else {
        DispatchResult::changed_with_many(effects)
    }
}

fn load_index(state: &mut AppState) -> Effect {
    state.gallery = DataResource::Loading;
    state.gallery_selected = 0;
    state.gallery_scroll = 0;
    Effect::LoadIndex {
        url: state.endpoints.index_url(),
    }
}

/// Normalize the raw field text and start a lookup. An empty term raises the
/// alert instead.
fn submit_lookup(state: &mut AppState, raw: &str) -> Option<Effect> {
    let term = raw.trim().to_lowercase();
    if term.is_empty() {
        state.alert = Some(EMPTY_TERM_ALERT.to_string());
        return None;
    }
    state.lookups_in_flight += 1;
    Some(Effect::LookupCreature {
        url: state.endpoints.lookup_url(&term),
        term,
    })
}

fn show_detail(state: &mut AppState, detail: &CreatureDetail) -> Vec<Effect> {
    let view = match DetailView::from_detail(detail) {
        Ok(view) => view,
        Err(_) => {
            lookup_failed(state);
            return Vec::new();
        }
    };

    let same_image = state
        .detail
        .as_ref()
        .is_some_and(|current| current.image_url == view.image_url)
        && !state.detail_sprite.is_empty();

    let mut effects = Vec::new();
    if !same_image {
        state.detail_sprite = match &view.image_url {
            Some(url) => {
                effects.push(Effect::LoadDetailSprite { url: url.clone() });
                DataResource::Loading
            }
            None => DataResource::Empty,
        };
    }

    state.detail = Some(view);
    state.detail_visible = true;
    effects
}

fn lookup_failed(state: &mut AppState) {
    state.alert = Some(NOT_FOUND_ALERT.to_string());
    state.detail_visible = false;
    if state.focus == FocusArea::Detail {
        state.focus = FocusArea::Search;
    }
}

fn is_current_image(state: &AppState, url: &str) -> bool {
    state
        .detail
        .as_ref()
        .and_then(|view| view.image_url.as_deref())
        == Some(url)
}

/// The tile at `index`, but only if it still belongs to `name` and is still
/// waiting on `stage`. Results for a replaced index or an old stage are dropped.
fn current_tile<'a>(
    state: &'a mut AppState,
    index: usize,
    name: &str,
    stage: FallbackStage,
) -> Option<&'a mut GalleryTile> {
    let DataResource::Loaded(tiles) = &mut state.gallery else {
        return None;
    };
    tiles
        .get_mut(index)
        .filter(|tile| tile.name == name && tile.sprite.stage == stage)
}

fn move_selection(state: &mut AppState, delta: i32) -> DispatchResult<Effect> {
    let len = state.tiles().len();
    if len == 0 {
        return DispatchResult::unchanged();
    }
    let next = (state.gallery_selected as i64 + delta as i64).clamp(0, len as i64 - 1) as usize;
    if next == state.gallery_selected {
        return DispatchResult::unchanged();
    }
    state.gallery_selected = next;
    scroll_to_selection(state);
    with_effects(request_visible_sprites(state))
}

/// Keep the selected tile's row inside the visible grid window.
fn scroll_to_selection(state: &mut AppState) {
    let Some(metrics) = state.gallery_metrics() else {
        return;
    };
    let row = state.gallery_selected / metrics.columns;
    if row < state.gallery_scroll {
        state.gallery_scroll = row;
    } else if row >= state.gallery_scroll + metrics.rows {
        state.gallery_scroll = row + 1 - metrics.rows;
    }
    let total_rows = state.tiles().len().div_ceil(metrics.columns);
    let max_scroll = total_rows.saturating_sub(metrics.rows);
    state.gallery_scroll = state.gallery_scroll.min(max_scroll);
}

/// Image loads for on-screen tiles that have not asked for their current
/// stage yet.
fn request_visible_sprites(state: &mut AppState) -> Vec<Effect> {
    let range = state.visible_tile_range();
    let endpoints = &state.endpoints;
    let DataResource::Loaded(tiles) = &mut state.gallery else {
        return Vec::new();
    };

    let mut effects = Vec::new();
    for index in range {
        let tile = &mut tiles[index];
        if tile.sprite.requested {
            continue;
        }
        let Some(url) = tile
            .id
            .as_deref()
            .and_then(|id| endpoints.tile_sprite_url(id, tile.sprite.stage))
        else {
            continue;
        };
        tile.sprite.requested = true;
        effects.push(Effect::LoadTileSprite {
            index,
            name: tile.name.clone(),
            stage: tile.sprite.stage,
            url,
        });
    }
    effects
}
