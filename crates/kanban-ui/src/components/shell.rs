use crate::app::effects::reduce_with_effects;
use crate::components::drawer::MobileDrawer;
use crate::components::header::DynamicHeader;
use crate::components::kanban::KanbanBoard;
use crate::components::sidebar::SidebarPanel;
use crate::core::nav::Tab;
use crate::core::sidebar::{SidebarId, SidebarMode};
use crate::core::store::{AppStore, select_tab};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(AppShell)]
pub(crate) fn app_shell() -> Html {
    let tab = use_selector(|store: &AppStore| store.tab);
    let mode = use_selector(|store: &AppStore| store.sidebars.mode());
    let layout_class = match *mode {
        SidebarMode::Docked => "layout-docked",
        SidebarMode::Overlay => "layout-overlay",
    };

    html! {
        <div class={classes!("app-shell", layout_class)}>
            <DynamicHeader />
            <MobileDrawer />
            <div class="app-body">
                <SidebarPanel id={SidebarId::Navigation} title="Navigation">
                    <ul class="rail-nav">
                        {for Tab::ALL.iter().map(|item| rail_item(*item, *tab))}
                    </ul>
                </SidebarPanel>
                <main class="app-main" data-tab={tab.key()}>
                    {tab_content(*tab)}
                </main>
                <SidebarPanel id={SidebarId::Details} title="Details">
                    <BoardSummary />
                </SidebarPanel>
            </div>
        </div>
    }
}

fn rail_item(tab: Tab, active: Tab) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| {
        reduce_with_effects(&Dispatch::<AppStore>::new(), |store| select_tab(store, tab));
    });
    let is_active = tab == active;
    html! {
        <li>
            <button
                type="button"
                class={classes!("rail-item", is_active.then_some("active"))}
                aria-current={is_active.then_some("page")}
                title={tab.full_label()}
                {onclick}
            >
                <span class="rail-icon" aria-hidden="true">{tab.icon()}</span>
                <span class="rail-label">{tab.short_label()}</span>
            </button>
        </li>
    }
}

fn tab_content(tab: Tab) -> Html {
    match tab {
        Tab::Board => html! { <KanbanBoard /> },
        other => html! {
            <section class="tab-placeholder">
                <h2>{other.full_label()}</h2>
                <p class="muted">{"Nothing here yet."}</p>
            </section>
        },
    }
}

/// Column totals for the loaded board.
#[function_component(BoardSummary)]
fn board_summary() -> Html {
    let summary = use_selector(|store: &AppStore| {
        store.board.board.as_ref().map(|board| {
            let counts: Vec<(String, usize)> = board
                .columns
                .iter()
                .map(|column| (column.name.clone(), column.cards.len()))
                .collect();
            (board.name.clone(), counts)
        })
    });

    match summary.as_ref() {
        Some((name, counts)) => html! {
            <div class="board-summary">
                <h3>{name.clone()}</h3>
                <dl>
                    {for counts.iter().map(|(column, count)| html! {
                        <>
                            <dt>{column.clone()}</dt>
                            <dd>{*count}</dd>
                        </>
                    })}
                </dl>
            </div>
        },
        None => html! { <p class="muted">{"No board loaded."}</p> },
    }
}
