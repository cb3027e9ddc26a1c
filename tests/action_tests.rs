//! Reducer, key routing and action metadata tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, EventKind, NumericComponentId, assert_emitted, assert_not_emitted};
use pokedex_lookup::{
    action::Action,
    components::{Component, LookupPage, LookupPageProps},
    effect::Effect,
    reducer::reducer,
    state::{
        AppState, CreatureDetail, Endpoints, FocusArea, SpriteSet, StatEntry, EMPTY_TERM_ALERT,
    },
};

fn page_actions(page: &mut LookupPage, state: &AppState, event: KeyEvent) -> Vec<Action> {
    page.handle_event(&EventKind::Key(event), LookupPageProps { state })
        .into_iter()
        .collect()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_init_loads_index_and_optional_term() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::Init);
    assert!(result.changed);
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::LoadIndex { .. }));
    assert!(store.state().gallery.is_loading());

    let state = AppState {
        search_query: "Eevee".into(),
        ..Default::default()
    };
    let mut store = EffectStore::new(state, reducer);
    let result = store.dispatch(Action::Init);
    assert_eq!(result.effects.len(), 2);
    assert!(matches!(
        &result.effects[1],
        Effect::LookupCreature { term, .. } if term == "eevee"
    ));
}

#[test]
fn test_lookup_url_uses_configured_base() {
    let endpoints = Endpoints {
        api_base: "http://localhost:9000/api/pokemon/".into(),
        sprite_base: "http://localhost:9000/sprites".into(),
    };
    let mut store = EffectStore::new(AppState::new(endpoints), reducer);

    let result = store.dispatch(Action::SearchSubmit("Mr Mime".into()));
    assert_eq!(
        result.effects,
        vec![Effect::LookupCreature {
            term: "mr mime".into(),
            url: "http://localhost:9000/api/pokemon/mr%20mime".into(),
        }]
    );
}

#[test]
fn test_overlapping_lookups_last_response_wins() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::SearchSubmit("pikachu".into()));
    store.dispatch(Action::SearchSubmit("eevee".into()));
    assert_eq!(store.state().lookups_in_flight, 2);

    let detail = |id: u32, name: &str| CreatureDetail {
        id,
        name: name.into(),
        weight: 1,
        height: 1,
        base_experience: None,
        order: None,
        sprites: SpriteSet::default(),
        abilities: Vec::new(),
        stats: (0..6)
            .map(|i| StatEntry {
                name: format!("stat{i}"),
                base_stat: 1,
            })
            .collect(),
        types: Vec::new(),
    };

    store.dispatch(Action::LookupDidLoad {
        term: "eevee".into(),
        detail: detail(133, "eevee"),
    });
    store.dispatch(Action::LookupDidLoad {
        term: "pikachu".into(),
        detail: detail(25, "pikachu"),
    });

    let view = store.state().detail.as_ref().expect("detail view");
    assert_eq!(view.display_name, "PIKACHU");
    assert_eq!(view.base_experience, "N/A");
    assert_eq!(store.state().lookups_in_flight, 0);
}

#[test]
fn test_search_field_enter_submits_query() {
    let mut page = LookupPage::new();
    let state = AppState {
        search_query: "bulbasaur".into(),
        ..Default::default()
    };
    let actions = page_actions(&mut page, &state, press(KeyCode::Enter));
    assert_emitted!(actions, Action::SearchSubmit(_));
}

#[test]
fn test_q_types_into_search_field() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut page = LookupPage::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("q", |state, event| {
        page.handle_event(&event.kind, LookupPageProps { state })
            .into_iter()
            .collect::<Vec<_>>()
    });

    assert_not_emitted!(actions, Action::Quit);
}

#[test]
fn test_q_quits_outside_search_field() {
    let mut page = LookupPage::new();
    let state = AppState {
        focus: FocusArea::Accordion,
        ..Default::default()
    };
    let actions = page_actions(&mut page, &state, press(KeyCode::Char('q')));
    actions.assert_first(Action::Quit);
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut page = LookupPage::new();
    let state = AppState {
        alert: Some(EMPTY_TERM_ALERT.into()),
        ..Default::default()
    };
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let actions = page_actions(&mut page, &state, ctrl_c);
    actions.assert_count(1);
    actions.assert_first(Action::Quit);
}

#[test]
fn test_alert_owns_keyboard() {
    let mut page = LookupPage::new();
    let state = AppState {
        focus: FocusArea::Accordion,
        alert: Some(EMPTY_TERM_ALERT.into()),
        ..Default::default()
    };

    page_actions(&mut page, &state, press(KeyCode::Tab)).assert_empty();
    page_actions(&mut page, &state, press(KeyCode::Char('q'))).assert_empty();
    page_actions(&mut page, &state, press(KeyCode::Esc)).assert_first(Action::AlertDismiss);

    let mut store = EffectStore::new(state, reducer);
    store.dispatch(Action::AlertDismiss);
    assert!(store.state().alert.is_none());
}

#[test]
fn test_tab_cycles_focus() {
    let mut page = LookupPage::new();
    let state = AppState::default();
    page_actions(&mut page, &state, press(KeyCode::Tab)).assert_first(Action::UiFocusNext);
    page_actions(&mut page, &state, press(KeyCode::BackTab)).assert_first(Action::UiFocusPrev);

    let mut store = EffectStore::new(state, reducer);
    store.dispatch(Action::UiFocusNext);
    assert_eq!(store.state().focus, FocusArea::SearchButton);
    store.dispatch(Action::UiFocusNext);
    assert_eq!(store.state().focus, FocusArea::Accordion);
}

#[test]
fn test_accordion_enter_toggles_gallery() {
    let mut page = LookupPage::new();
    let state = AppState {
        focus: FocusArea::Accordion,
        ..Default::default()
    };
    let actions = page_actions(&mut page, &state, press(KeyCode::Enter));
    actions.assert_first(Action::AccordionToggle);

    let mut store = EffectStore::new(state, reducer);
    store.dispatch(Action::AccordionToggle);
    assert!(store.state().gallery_expanded);
    store.dispatch(Action::AccordionToggle);
    assert!(!store.state().gallery_expanded);
}

#[test]
fn test_action_categories() {
    let did_error = Action::LookupDidError {
        term: "agumon".into(),
        error: "404".into(),
    };
    let focus = Action::UiFocusNext;

    assert_eq!(did_error.category(), Some("lookup_did"));
    assert_eq!(focus.category(), Some("ui"));
    assert_eq!(Action::Quit.category(), None);

    assert!(did_error.is_lookup_did());
    assert!(focus.is_ui());
}

#[test]
fn test_empty_submit_emits_no_effect() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::SearchSubmit(String::new()));
    assert!(result.effects.is_empty());
    assert_eq!(store.state().alert.as_deref(), Some(EMPTY_TERM_ALERT));
}
