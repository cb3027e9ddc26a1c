//! Pokedex lookup TUI

use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex_lookup::action::Action;
use pokedex_lookup::api::ApiClient;
use pokedex_lookup::components::{Component, LookupPage, LookupPageProps};
use pokedex_lookup::effect::Effect;
use pokedex_lookup::layout::{DETAIL_SPRITE_PX, TILE_SPRITE_PX};
use pokedex_lookup::logging;
use pokedex_lookup::reducer::reducer;
use pokedex_lookup::state::{AppState, DEFAULT_API_BASE, DEFAULT_SPRITE_BASE, Endpoints};

/// Look up Pokémon by name or ID and browse the full list
#[derive(Parser, Debug)]
#[command(name = "pokedex-lookup")]
#[command(about = "Pokémon lookup with a browsable gallery")]
struct Args {
    /// Base URL of the Pokémon proxy API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Base URL for gallery sprite images
    #[arg(long, default_value = DEFAULT_SPRITE_BASE)]
    sprite_base: String,

    /// Name or ID to look up at start-up
    #[arg(long, short)]
    term: Option<String>,

    /// Log file (default: user cache dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Page,
    Alert,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
    Alert,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        if self.alert.is_some() {
            Some(LookupComponentId::Alert)
        } else {
            Some(LookupComponentId::Page)
        }
    }

    fn modal(&self) -> Option<LookupComponentId> {
        self.alert.as_ref().map(|_| LookupComponentId::Alert)
    }

    fn binding_context(&self, id: LookupComponentId) -> LookupContext {
        match id {
            LookupComponentId::Page => LookupContext::Main,
            LookupComponentId::Alert => LookupContext::Alert,
        }
    }

    fn default_context(&self) -> LookupContext {
        LookupContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_base,
        sprite_base,
        term,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = logging::init(log_file)?;
    tracing::info!(log = %log_path.display(), %api_base, "starting");

    let debug = DebugSession::new(debug_args);
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let endpoints = Endpoints {
        api_base,
        sprite_base,
    };
    let mut state = debug
        .load_state_or_else_async(|| {
            let endpoints = endpoints.clone();
            async move { Ok::<AppState, io::Error>(AppState::new(endpoints)) }
        })
        .await
        .map_err(debug_error)?;

    state.endpoints = endpoints;
    if let Some(term) = term {
        state.search_query = term;
    }
    state.terminal_size = crossterm::terminal::size().unwrap_or(state.terminal_size);

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let client = ApiClient::new(reqwest::Client::new());

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, client).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    tracing::info!("exiting");
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    client: ApiClient,
) -> io::Result<DebugRunOutput<AppState>> {
    let page = Rc::new(RefCell::new(LookupPage::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let page_main = Rc::clone(&page);
    bus.register(LookupComponentId::Page, move |event, state| {
        handle_page_event(&mut page_main.borrow_mut(), &event.kind, state)
    });

    let page_alert = Rc::clone(&page);
    bus.register(LookupComponentId::Alert, move |event, state| {
        handle_page_event(&mut page_alert.borrow_mut(), &event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        _ => HandlerResponse::ignored(),
    });

    let lookup_seq = Cell::new(0u64);

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, _render_ctx, event_ctx| {
                event_ctx.set_component_area(LookupComponentId::Page, area);
                if state.alert.is_some() {
                    event_ctx.set_component_area(LookupComponentId::Alert, area);
                } else {
                    event_ctx
                        .component_areas
                        .remove(&LookupComponentId::Alert);
                }
                page.borrow_mut()
                    .render(frame, area, LookupPageProps { state });
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client, &lookup_seq),
        )
        .await
}

fn handle_page_event(
    page: &mut LookupPage,
    event: &EventKind,
    state: &AppState,
) -> HandlerResponse<Action> {
    let actions: Vec<_> = page
        .handle_event(event, LookupPageProps { state })
        .into_iter()
        .collect();
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

/// Handle effects by spawning tasks
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    client: &ApiClient,
    lookup_seq: &Cell<u64>,
) {
    match effect {
        Effect::LookupCreature { term, url } => {
            // Lookups are never cancelled; every one gets its own task.
            let seq = lookup_seq.get();
            lookup_seq.set(seq.wrapping_add(1));
            let client = client.clone();
            tracing::info!(%term, "lookup");
            ctx.tasks()
                .spawn(TaskKey::new(format!("lookup_{seq}")), async move {
                    match client.fetch_creature(&url).await {
                        Ok(detail) => Action::LookupDidLoad { term, detail },
                        Err(error) => {
                            tracing::warn!(%term, %error, "lookup failed");
                            Action::LookupDidError {
                                term,
                                error: error.to_string(),
                            }
                        }
                    }
                });
        }
        Effect::LoadIndex { url } => {
            let client = client.clone();
            ctx.tasks().spawn(TaskKey::new("index"), async move {
                match client.fetch_index(&url).await {
                    Ok(entries) => Action::GalleryDidLoad(entries),
                    Err(error) => {
                        tracing::error!(%error, "index load failed");
                        Action::GalleryDidError(error.to_string())
                    }
                }
            });
        }
        Effect::LoadDetailSprite { url } => {
            let client = client.clone();
            let (max_width, max_height) = DETAIL_SPRITE_PX;
            ctx.tasks().spawn(TaskKey::new("detail_sprite"), async move {
                match client.fetch_sprite(&url, max_width, max_height).await {
                    Ok(sprite) => Action::DetailSpriteDidLoad { url, sprite },
                    Err(error) => {
                        tracing::warn!(%url, %error, "detail image failed");
                        Action::DetailSpriteDidError {
                            url,
                            error: error.to_string(),
                        }
                    }
                }
            });
        }
        Effect::LoadTileSprite {
            index,
            name,
            stage,
            url,
        } => {
            let client = client.clone();
            let (max_width, max_height) = TILE_SPRITE_PX;
            let key = format!("tile_{index}_{stage:?}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match client.fetch_sprite(&url, max_width, max_height).await {
                    Ok(sprite) => Action::TileSpriteDidLoad {
                        index,
                        name,
                        stage,
                        sprite,
                    },
                    Err(error) => {
                        tracing::debug!(%name, ?stage, %error, "tile image failed");
                        Action::TileSpriteDidError {
                            index,
                            name,
                            stage,
                            error: error.to_string(),
                        }
                    }
                }
            });
        }
    }
}
