use crate::components::hamburger::HamburgerMenu;
use crate::components::sidebar::SidebarTrigger;
use crate::core::device::SCROLLED_CLASS;
use crate::core::header::{HeaderContext, header_title};
use crate::core::sidebar::SidebarId;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Top bar whose title follows the active tab and breakpoint.
#[function_component(DynamicHeader)]
pub(crate) fn dynamic_header() -> Html {
    let tab = use_selector(|store: &AppStore| store.tab);
    let breakpoint = use_selector(|store: &AppStore| store.layout.viewport.breakpoint);
    let scrolled = use_selector(|store: &AppStore| store.layout.scrolled);
    let board_name = use_selector(|store: &AppStore| {
        store.board.board.as_ref().map(|board| board.name.clone())
    });

    let title = header_title(HeaderContext {
        tab: *tab,
        breakpoint: *breakpoint,
        board_name: board_name.as_deref(),
    });

    html! {
        <header class={classes!("app-header", (*scrolled).then_some(SCROLLED_CLASS))}>
            <HamburgerMenu />
            <h1 class="header-title" data-breakpoint={breakpoint.as_str()}>{title}</h1>
            <div class="header-actions">
                <SidebarTrigger id={SidebarId::Details} />
            </div>
        </header>
    }
}
