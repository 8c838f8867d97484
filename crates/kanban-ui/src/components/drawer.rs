//! Slide-out navigation for mobile and tablet layouts.

use crate::app::api::ApiCtx;
use crate::app::dom::{set_body_class, touch_event_point};
use crate::app::effects::reduce_with_effects;
use crate::core::config::APP_NAME;
use crate::core::drawer::CloseReason;
use crate::core::nav::Tab;
use crate::core::store::{AppStore, dismiss_drawer, select_tab};
use crate::core::swipe::{EdgeState, SwipeDirection, SwipeOutcome, SwipeTracker};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Body class that locks page scrolling while the drawer is open.
const DRAWER_OPEN_CLASS: &str = "drawer-open";

fn close_drawer(reason: CloseReason) {
    reduce_with_effects(&Dispatch::<AppStore>::new(), |store| {
        dismiss_drawer(store, reason)
    });
}

#[function_component(MobileDrawer)]
pub(crate) fn mobile_drawer() -> Html {
    let drawer = use_selector(|store: &AppStore| store.drawer);
    let active = use_selector(|store: &AppStore| store.tab);
    let api_ctx = use_context::<ApiCtx>();
    let tracker = use_mut_ref(SwipeTracker::default);
    let open = drawer.is_open();

    use_effect_with_deps(
        |open: &bool| {
            set_body_class(DRAWER_OPEN_CLASS, *open);
            || set_body_class(DRAWER_OPEN_CLASS, false)
        },
        open,
    );

    let on_overlay = Callback::from(|_: MouseEvent| close_drawer(CloseReason::Overlay));

    let ontouchstart = {
        let tracker = tracker.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some((x, y)) = touch_event_point(&event, false) {
                tracker.borrow_mut().start(x, y, event.time_stamp());
            }
        })
    };
    let ontouchmove = {
        let tracker = tracker.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some((x, y)) = touch_event_point(&event, false) {
                let _ = tracker.borrow_mut().update(x, y, EdgeState::default());
            }
        })
    };
    let ontouchend = {
        let tracker = tracker.clone();
        Callback::from(move |event: TouchEvent| {
            let outcome = match touch_event_point(&event, true) {
                Some((x, _)) => tracker.borrow_mut().finish(x, event.time_stamp()),
                None => {
                    tracker.borrow_mut().cancel();
                    SwipeOutcome::Ignored
                }
            };
            if outcome == SwipeOutcome::Swipe(SwipeDirection::Next) {
                close_drawer(CloseReason::Swipe);
            }
        })
    };
    let ontouchcancel = Callback::from(move |_: TouchEvent| tracker.borrow_mut().cancel());

    let on_logout = Callback::from(move |_: MouseEvent| {
        close_drawer(CloseReason::Logout);
        if let Some(ctx) = api_ctx.clone() {
            spawn_local(async move {
                ctx.client.logout().await;
            });
        }
    });

    html! {
        <>
            <div
                class={classes!("drawer-overlay", open.then_some("visible"))}
                aria-hidden="true"
                onclick={on_overlay}
            ></div>
            <nav
                id="mobile-drawer"
                class={classes!("mobile-drawer", open.then_some("open"))}
                aria-hidden={if open { "false" } else { "true" }}
                aria-label="Main navigation"
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {ontouchcancel}
            >
                <div class="drawer-header">
                    <strong>{APP_NAME}</strong>
                </div>
                <ul class="drawer-nav">
                    {for Tab::ALL.iter().map(|tab| nav_item(*tab, *active))}
                </ul>
                <div class="drawer-footer">
                    <button type="button" class="drawer-logout" onclick={on_logout}>{"Log out"}</button>
                </div>
            </nav>
        </>
    }
}

fn nav_item(tab: Tab, active: Tab) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| {
        reduce_with_effects(&Dispatch::<AppStore>::new(), |store| select_tab(store, tab));
    });
    let is_active = tab == active;
    html! {
        <li>
            <button
                type="button"
                class={classes!("drawer-item", is_active.then_some("active"))}
                aria-current={is_active.then_some("page")}
                data-tab={tab.key()}
                {onclick}
            >
                <span class="drawer-icon" aria-hidden="true">{tab.icon()}</span>
                <span class="drawer-label">{tab.short_label()}</span>
            </button>
        </li>
    }
}
