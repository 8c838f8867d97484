//! Run store reducers and carry out the effects they request.

use crate::app::dom::emit_dom_event;
use crate::app::preferences::{persist_column, persist_sidebar_prefs, persist_tab};
use crate::core::events::ShellEvent;
use crate::core::store::{AppStore, ShellEffect, apply_shell_event};
use yewdux::prelude::Dispatch;

/// Apply `reducer` to a copy of the store, publish it, then execute the effects.
pub(crate) fn reduce_with_effects<F>(dispatch: &Dispatch<AppStore>, reducer: F)
where
    F: FnOnce(&mut AppStore) -> Vec<ShellEffect>,
{
    let mut next = (*dispatch.get()).clone();
    let effects = reducer(&mut next);
    dispatch.set(next.clone());
    run_effects(&next, &effects);
}

/// Shorthand for dispatching a single shell event.
pub(crate) fn dispatch_shell(dispatch: &Dispatch<AppStore>, event: ShellEvent) {
    reduce_with_effects(dispatch, |store| apply_shell_event(store, event));
}

fn run_effects(store: &AppStore, effects: &[ShellEffect]) {
    for effect in effects {
        match effect {
            ShellEffect::Emit(event) => emit_dom_event(*event),
            ShellEffect::PersistSidebars => persist_sidebar_prefs(store.sidebars.prefs()),
            ShellEffect::PersistTab(tab) => persist_tab(*tab),
            ShellEffect::PersistColumn => {
                if let Some(board) = &store.board.board {
                    persist_column(&board.id, store.board.pager.index());
                }
            }
        }
    }
}
