use crate::app::api::ApiCtx;
use crate::app::dom::{custom_event_detail, set_document_title};
use crate::app::effects::{dispatch_shell, reduce_with_effects};
use crate::app::preferences::{api_base_url, load_column, load_tab};
use crate::app::viewport::use_viewport_watcher;
use crate::components::shell::AppShell;
use crate::core::config::LayoutConfig;
use crate::core::events::{LISTENED_EVENTS, ShellEvent};
use crate::core::header::document_title;
use crate::core::http::ApiError;
use crate::core::models::demo_board;
use crate::core::nav::Tab;
use crate::core::store::{AppStore, set_board};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod dom;
pub(crate) mod effects;
pub(crate) mod preferences;
pub(crate) mod routes;
pub(crate) mod viewport;

pub(crate) use routes::Route;

/// Board loaded on boot; the backend treats `default` as the user's last board.
const DEFAULT_BOARD_ID: &str = "default";

#[function_component(KanbanApp)]
fn kanban_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <RoutedShell />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Keeps the active tab, the URL and the board data in sync, then renders the shell.
#[function_component(RoutedShell)]
fn routed_shell() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let navigator = use_navigator();
    let tab = use_selector(|store: &AppStore| store.tab);

    use_viewport_watcher(LayoutConfig::default());
    use_shell_listeners();

    {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |route: &Route| {
                match route.tab() {
                    Some(tab) if dispatch.get().tab != tab => {
                        dispatch_shell(&dispatch, ShellEvent::TabChange(tab));
                    }
                    Some(_) => {}
                    None if *route == Route::Home => {
                        if let Some(navigator) = navigator {
                            navigator.replace(&Route::for_tab(load_tab()));
                        }
                    }
                    None => {}
                }
                || ()
            },
            route.clone(),
        );
    }
    {
        let route = route.clone();
        use_effect_with_deps(
            move |tab: &Rc<Tab>| {
                let tab = **tab;
                set_document_title(&document_title(tab));
                if matches!(route.tab(), Some(current) if current != tab) {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::for_tab(tab));
                    }
                }
                || ()
            },
            tab,
        );
    }
    use_effect_with_deps(
        move |_| {
            load_board(dispatch, api_ctx);
            || ()
        },
        (),
    );

    html! { <AppShell /> }
}

/// Fetch the board, falling back to the demo board when the API is unavailable.
pub(crate) fn load_board(dispatch: Dispatch<AppStore>, api_ctx: Option<ApiCtx>) {
    dispatch.reduce_mut(|store| store.board.loading = true);
    yew::platform::spawn_local(async move {
        let result = match api_ctx {
            Some(ctx) => ctx.client.fetch_board(DEFAULT_BOARD_ID).await,
            None => Err(ApiError::Network("api context missing".to_string())),
        };
        let (board, error) = match result {
            Ok(board) => (board, None),
            Err(err) => {
                console::warn!("board load failed; showing demo board", err.to_string());
                (demo_board(), Some(err.to_string()))
            }
        };
        let restored = load_column(&board.id);
        reduce_with_effects(&dispatch, |store| {
            set_board(store, board, restored);
            store.board.error = error;
            Vec::new()
        });
    });
}

/// Global keyboard shortcuts and DOM `CustomEvent` interop.
#[hook]
fn use_shell_listeners() {
    use_effect_with_deps(
        move |_| {
            let dispatch = Dispatch::<AppStore>::new();
            let mut listeners = Vec::new();
            listeners.push(EventListener::new(&document(), "keydown", {
                let dispatch = dispatch.clone();
                move |event| {
                    if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                        if key == "Escape" {
                            dispatch_shell(&dispatch, ShellEvent::Dismiss);
                        }
                    }
                }
            }));
            for name in LISTENED_EVENTS {
                let dispatch = dispatch.clone();
                listeners.push(EventListener::new(&document(), name, move |event| {
                    let detail = custom_event_detail(event);
                    if let Some(shell_event) = ShellEvent::from_dom(name, detail.as_deref()) {
                        dispatch_shell(&dispatch, shell_event);
                    }
                }));
            }
            move || drop(listeners)
        },
        (),
    );
}

/// Mount the kanban UI into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<KanbanApp>::with_root(root).render();
    } else {
        yew::Renderer::<KanbanApp>::new().render();
    }
}
