use crate::app::effects::reduce_with_effects;
use crate::core::store::{AppStore, toggle_drawer};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Drawer toggle rendered in the header on mobile and tablet.
#[function_component(HamburgerMenu)]
pub(crate) fn hamburger_menu() -> Html {
    let drawer = use_selector(|store: &AppStore| store.drawer);
    let breakpoint = use_selector(|store: &AppStore| store.layout.viewport.breakpoint);
    if breakpoint.is_desktop() {
        return html! {};
    }

    let open = drawer.is_open();
    let onclick = Callback::from(|_: MouseEvent| {
        reduce_with_effects(&Dispatch::<AppStore>::new(), toggle_drawer);
    });

    html! {
        <button
            type="button"
            class={classes!("hamburger", open.then_some("is-active"))}
            aria-label={drawer.toggle_label()}
            aria-expanded={if open { "true" } else { "false" }}
            aria-controls="mobile-drawer"
            {onclick}
        >
            <span class="hamburger-box">
                <span class="hamburger-inner"></span>
            </span>
        </button>
    }
}
