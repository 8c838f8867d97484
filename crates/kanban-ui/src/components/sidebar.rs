//! Collapsible sidebars that dock on wide layouts and overlay on narrow ones.

use crate::app::effects::reduce_with_effects;
use crate::core::sidebar::{SidebarId, SidebarMode};
use crate::core::store::{AppStore, toggle_sidebar};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

fn toggle(id: SidebarId) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        reduce_with_effects(&Dispatch::<AppStore>::new(), |store| {
            toggle_sidebar(store, id)
        });
    })
}

fn panel_id(id: SidebarId) -> String {
    format!("sidebar-{}", id.key())
}

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarPanelProps {
    pub(crate) id: SidebarId,
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(SidebarPanel)]
pub(crate) fn sidebar_panel(props: &SidebarPanelProps) -> Html {
    let id = props.id;
    let state = use_selector(move |store: &AppStore| store.sidebars.state(id));
    let mode = use_selector(|store: &AppStore| store.sidebars.mode());

    let (mode_class, visible) = match *mode {
        SidebarMode::Docked => ("docked", true),
        SidebarMode::Overlay => ("overlay", state.open),
    };
    let expanded = state.expanded;

    html! {
        <>
            if *mode == SidebarMode::Overlay && state.open {
                <div class="sidebar-backdrop" aria-hidden="true" onclick={toggle(id)}></div>
            }
            <aside
                id={panel_id(id)}
                class={classes!(
                    "sidebar",
                    format!("sidebar-{}", id.key()),
                    mode_class,
                    state.open.then_some("open"),
                    if expanded { "expanded" } else { "collapsed" },
                )}
                aria-hidden={if visible { "false" } else { "true" }}
                aria-label={props.title.clone()}
            >
                <div class="sidebar-header">
                    if expanded {
                        <span class="sidebar-title">{props.title.clone()}</span>
                    }
                    <button
                        type="button"
                        class="sidebar-toggle"
                        aria-controls={panel_id(id)}
                        aria-expanded={if expanded && visible { "true" } else { "false" }}
                        aria-label={toggle_label(*mode, expanded, &props.title)}
                        onclick={toggle(id)}
                    >
                        {if *mode == SidebarMode::Docked && !expanded { "»" } else { "«" }}
                    </button>
                </div>
                <div class="sidebar-body">
                    {for props.children.iter()}
                </div>
            </aside>
        </>
    }
}

fn toggle_label(mode: SidebarMode, expanded: bool, title: &str) -> String {
    match (mode, expanded) {
        (SidebarMode::Docked, true) => format!("Collapse {title}"),
        (SidebarMode::Docked, false) => format!("Expand {title}"),
        (SidebarMode::Overlay, _) => format!("Close {title}"),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarTriggerProps {
    pub(crate) id: SidebarId,
}

/// Header button that opens an overlay sidebar; renders nothing while docked.
#[function_component(SidebarTrigger)]
pub(crate) fn sidebar_trigger(props: &SidebarTriggerProps) -> Html {
    let id = props.id;
    let open = use_selector(move |store: &AppStore| store.sidebars.state(id).open);
    let mode = use_selector(|store: &AppStore| store.sidebars.mode());
    if *mode == SidebarMode::Docked {
        return html! {};
    }
    html! {
        <button
            type="button"
            class={classes!("sidebar-trigger", (*open).then_some("active"))}
            aria-controls={panel_id(id)}
            aria-expanded={if *open { "true" } else { "false" }}
            aria-label={format!("Toggle {} panel", id.key())}
            onclick={toggle(id)}
        >
            {"ⓘ"}
        </button>
    }
}
