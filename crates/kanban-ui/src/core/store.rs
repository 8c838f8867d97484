//! App-wide yewdux store slices and the shell event reducer.
//!
//! # Design
//! - Keep shared UI state in one store so sibling components never talk directly.
//! - Reducers are pure over the store and report follow-up events or persistence needs.

use crate::core::breakpoints::Viewport;
use crate::core::device::DeviceCaps;
use crate::core::drawer::{CloseReason, DrawerState};
use crate::core::events::ShellEvent;
use crate::core::models::Board;
use crate::core::nav::Tab;
use crate::core::pager::ColumnPager;
use crate::core::sidebar::{SidebarId, SidebarSet};
use crate::core::swipe::SwipeDirection;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Viewport and device state.
    pub layout: LayoutSlice,
    /// Mobile drawer.
    pub drawer: DrawerState,
    /// Active navigation tab.
    pub tab: Tab,
    /// Collapsible sidebars.
    pub sidebars: SidebarSet,
    /// Loaded board and mobile pager.
    pub board: BoardSlice,
}

/// Viewport classification and device flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutSlice {
    /// Current viewport.
    pub viewport: Viewport,
    /// Device capabilities.
    pub caps: DeviceCaps,
    /// On-screen keyboard heuristic.
    pub keyboard_open: bool,
    /// Page scrolled past the top.
    pub scrolled: bool,
}

/// Board data plus the mobile column pager.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardSlice {
    /// Loaded board.
    pub board: Option<Board>,
    /// Load in flight.
    pub loading: bool,
    /// Last load error, shown above the demo board.
    pub error: Option<String>,
    /// Mobile pager position.
    pub pager: ColumnPager,
    /// Live drag offset in pixels while a swipe is in progress.
    pub drag_offset: f64,
}

/// Follow-up work requested by a reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEffect {
    /// Mirror this event to the DOM.
    Emit(ShellEvent),
    /// Write sidebar preferences to storage.
    PersistSidebars,
    /// Write the active tab to storage.
    PersistTab(Tab),
    /// Write the pager column for the loaded board to storage.
    PersistColumn,
}

/// Apply a shell event to the store.
pub fn apply_shell_event(store: &mut AppStore, event: ShellEvent) -> Vec<ShellEffect> {
    let mut effects = Vec::new();
    let narrow = store.layout.viewport.breakpoint.is_narrow();
    match event {
        ShellEvent::DrawerToggle => {
            if store.drawer.is_open() {
                close_drawer(store, CloseReason::Toggle, &mut effects);
            } else if narrow {
                open_drawer(store);
            }
        }
        ShellEvent::DrawerOpen => {
            if narrow {
                open_drawer(store);
            }
        }
        ShellEvent::DrawerClose => {
            store.drawer.close(CloseReason::External);
        }
        ShellEvent::TabChange(tab) => {
            if store.tab != tab {
                store.tab = tab;
                effects.push(ShellEffect::PersistTab(tab));
            }
            close_drawer(store, CloseReason::Navigate, &mut effects);
        }
        ShellEvent::BreakpointChange(breakpoint) => {
            if breakpoint.is_desktop() {
                close_drawer(store, CloseReason::Desktop, &mut effects);
            }
            if !breakpoint.is_mobile() {
                store.board.drag_offset = 0.0;
            }
        }
        ShellEvent::SidebarToggle(id) => {
            let effect = store.sidebars.toggle(id);
            if effect.persist {
                effects.push(ShellEffect::PersistSidebars);
            }
            if effect.state.open && store.sidebars.overlay_open() {
                close_drawer(store, CloseReason::External, &mut effects);
            }
        }
        ShellEvent::Dismiss => {
            close_drawer(store, CloseReason::Escape, &mut effects);
            store.sidebars.close_overlays();
        }
    }
    effects
}

/// Record a new viewport measurement; emits a breakpoint change when the bucket moves.
pub fn apply_viewport(store: &mut AppStore, viewport: Viewport) -> Vec<ShellEffect> {
    let previous = store.layout.viewport;
    store.layout.viewport = viewport;
    store.sidebars.apply_layout(viewport);
    if previous.breakpoint == viewport.breakpoint {
        return Vec::new();
    }
    let event = ShellEvent::BreakpointChange(viewport.breakpoint);
    let mut effects = vec![ShellEffect::Emit(event)];
    effects.extend(apply_shell_event(store, event));
    effects
}

/// Install a freshly loaded board, restoring a stored column index.
pub fn set_board(store: &mut AppStore, board: Board, restored_column: Option<usize>) {
    let count = board.columns.len();
    store.board.pager = ColumnPager::new(count, restored_column.unwrap_or(0));
    store.board.board = Some(board);
    store.board.loading = false;
    store.board.drag_offset = 0.0;
}

/// Move the pager to an explicit column.
pub fn go_to_column(store: &mut AppStore, index: usize) -> Vec<ShellEffect> {
    store.board.drag_offset = 0.0;
    if store.board.pager.go_to(index) {
        vec![ShellEffect::PersistColumn]
    } else {
        Vec::new()
    }
}

/// Apply an accepted swipe to the pager.
pub fn swipe_column(store: &mut AppStore, direction: SwipeDirection) -> Vec<ShellEffect> {
    store.board.drag_offset = 0.0;
    if store.board.pager.apply_swipe(direction) {
        vec![ShellEffect::PersistColumn]
    } else {
        Vec::new()
    }
}

/// Page the board with an arrow key. Ignored while the drawer is open or when the
/// key was typed into an editable element.
pub fn arrow_key_column(
    store: &mut AppStore,
    key: &str,
    editable_target: bool,
) -> Vec<ShellEffect> {
    if editable_target || store.drawer.is_open() {
        return Vec::new();
    }
    match key {
        "ArrowLeft" => swipe_column(store, SwipeDirection::Previous),
        "ArrowRight" => swipe_column(store, SwipeDirection::Next),
        _ => Vec::new(),
    }
}

/// Close the drawer from inside the app (overlay, swipe, logout) and announce it.
pub fn dismiss_drawer(store: &mut AppStore, reason: CloseReason) -> Vec<ShellEffect> {
    let mut effects = Vec::new();
    close_drawer(store, reason, &mut effects);
    effects
}

/// User picked a tab in the app; announce it, then apply it.
pub fn select_tab(store: &mut AppStore, tab: Tab) -> Vec<ShellEffect> {
    announce_then_apply(store, ShellEvent::TabChange(tab))
}

/// User pressed the hamburger; announce the toggle, then apply it.
pub fn toggle_drawer(store: &mut AppStore) -> Vec<ShellEffect> {
    announce_then_apply(store, ShellEvent::DrawerToggle)
}

/// User pressed a sidebar toggle; announce it, then apply it.
pub fn toggle_sidebar(store: &mut AppStore, id: SidebarId) -> Vec<ShellEffect> {
    announce_then_apply(store, ShellEvent::SidebarToggle(id))
}

fn announce_then_apply(store: &mut AppStore, event: ShellEvent) -> Vec<ShellEffect> {
    let mut effects = vec![ShellEffect::Emit(event)];
    effects.extend(apply_shell_event(store, event));
    effects
}

/// Whether the sidebar with `id` is open.
#[must_use]
pub fn sidebar_open(store: &AppStore, id: SidebarId) -> bool {
    store.sidebars.state(id).open
}

fn open_drawer(store: &mut AppStore) {
    if store.drawer.open() {
        store.sidebars.close_overlays();
    }
}

fn close_drawer(store: &mut AppStore, reason: CloseReason, effects: &mut Vec<ShellEffect>) {
    if store.drawer.close(reason) {
        effects.push(ShellEffect::Emit(ShellEvent::DrawerClose));
    }
}
