//! Collapsible sidebar state machine.
//!
//! # Design
//! - Layout (breakpoint + orientation) decides whether sidebars dock or overlay.
//! - Docked sidebars are always open; the user toggles `expanded`, which is persisted.
//! - Overlay sidebars start closed; the user toggles `open` and only one overlay is open.

use crate::core::breakpoints::{Breakpoint, Orientation, Viewport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registered sidebars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SidebarId {
    /// Primary navigation rail.
    Navigation,
    /// Card details panel.
    Details,
}

impl SidebarId {
    /// Every registered sidebar.
    pub const ALL: [Self; 2] = [Self::Navigation, Self::Details];

    /// Stable key used for persistence and DOM ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Details => "details",
        }
    }
}

/// How sidebars are laid out for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMode {
    /// Sidebars sit beside the content and collapse to an icon rail.
    Docked,
    /// Sidebars slide over the content and close when dismissed.
    Overlay,
}

impl SidebarMode {
    /// Mode for a breakpoint and orientation.
    #[must_use]
    pub const fn for_layout(breakpoint: Breakpoint, orientation: Orientation) -> Self {
        match (breakpoint, orientation) {
            (Breakpoint::Desktop, _) | (Breakpoint::Tablet, Orientation::Landscape) => {
                Self::Docked
            }
            _ => Self::Overlay,
        }
    }
}

/// Visible state for a single sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    /// Sidebar is visible.
    pub open: bool,
    /// Sidebar shows labels rather than the icon rail.
    pub expanded: bool,
}

/// Persisted per-sidebar preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarPref {
    /// Whether the docked sidebar was left expanded.
    pub expanded: bool,
}

/// Persisted preferences keyed by [`SidebarId::key`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarPrefs(pub BTreeMap<String, SidebarPref>);

impl SidebarPrefs {
    /// Parse stored JSON; corrupt payloads yield empty preferences.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Serialize for storage.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn expanded(&self, id: SidebarId) -> Option<bool> {
        self.0.get(id.key()).map(|pref| pref.expanded)
    }

    fn set_expanded(&mut self, id: SidebarId, expanded: bool) {
        self.0
            .insert(id.key().to_string(), SidebarPref { expanded });
    }
}

/// Side effects a toggle asks the caller to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleEffect {
    /// New state of the toggled sidebar.
    pub state: SidebarState,
    /// Preferences changed and should be written back to storage.
    pub persist: bool,
}

/// State of every registered sidebar for the current layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSet {
    breakpoint: Breakpoint,
    mode: SidebarMode,
    states: BTreeMap<SidebarId, SidebarState>,
    prefs: SidebarPrefs,
}

impl Default for SidebarSet {
    fn default() -> Self {
        Self::new(Viewport::default(), SidebarPrefs::default())
    }
}

impl SidebarSet {
    /// Build the set for a viewport using stored preferences.
    #[must_use]
    pub fn new(viewport: Viewport, prefs: SidebarPrefs) -> Self {
        let mut set = Self {
            breakpoint: viewport.breakpoint,
            mode: SidebarMode::for_layout(viewport.breakpoint, viewport.orientation),
            states: BTreeMap::new(),
            prefs,
        };
        set.reset_states();
        set
    }

    /// Re-derive every sidebar for a new layout. Returns whether anything changed.
    pub fn apply_layout(&mut self, viewport: Viewport) -> bool {
        let mode = SidebarMode::for_layout(viewport.breakpoint, viewport.orientation);
        if mode == self.mode && viewport.breakpoint == self.breakpoint {
            return false;
        }
        self.breakpoint = viewport.breakpoint;
        self.mode = mode;
        let before = self.states.clone();
        self.reset_states();
        before != self.states
    }

    /// Current layout mode.
    #[must_use]
    pub const fn mode(&self) -> SidebarMode {
        self.mode
    }

    /// State for a sidebar.
    #[must_use]
    pub fn state(&self, id: SidebarId) -> SidebarState {
        self.states
            .get(&id)
            .copied()
            .unwrap_or_else(|| self.initial_state(id))
    }

    /// Stored preferences.
    #[must_use]
    pub const fn prefs(&self) -> &SidebarPrefs {
        &self.prefs
    }

    /// Toggle a sidebar according to the current mode.
    pub fn toggle(&mut self, id: SidebarId) -> ToggleEffect {
        let current = self.state(id);
        match self.mode {
            SidebarMode::Docked => {
                let next = SidebarState {
                    open: true,
                    expanded: !current.expanded,
                };
                self.states.insert(id, next);
                self.prefs.set_expanded(id, next.expanded);
                ToggleEffect {
                    state: next,
                    persist: true,
                }
            }
            SidebarMode::Overlay => {
                let opening = !current.open;
                if opening {
                    self.close_overlays();
                }
                let next = SidebarState {
                    open: opening,
                    expanded: true,
                };
                self.states.insert(id, next);
                ToggleEffect {
                    state: next,
                    persist: false,
                }
            }
        }
    }

    /// Close every overlay sidebar. Returns whether any was open.
    pub fn close_overlays(&mut self) -> bool {
        if self.mode != SidebarMode::Overlay {
            return false;
        }
        let mut closed = false;
        for state in self.states.values_mut() {
            if state.open {
                state.open = false;
                closed = true;
            }
        }
        closed
    }

    /// Whether any overlay sidebar is currently open.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.mode == SidebarMode::Overlay && self.states.values().any(|state| state.open)
    }

    fn reset_states(&mut self) {
        self.states = SidebarId::ALL
            .into_iter()
            .map(|id| (id, self.initial_state(id)))
            .collect();
    }

    fn initial_state(&self, id: SidebarId) -> SidebarState {
        match self.mode {
            SidebarMode::Docked => SidebarState {
                open: true,
                expanded: self
                    .prefs
                    .expanded(id)
                    .unwrap_or_else(|| self.breakpoint.is_desktop()),
            },
            SidebarMode::Overlay => SidebarState {
                open: false,
                expanded: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LayoutConfig;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::measure(width, height, &LayoutConfig::default())
    }

    #[test]
    fn layout_selects_mode() {
        assert_eq!(
            SidebarMode::for_layout(Breakpoint::Desktop, Orientation::Portrait),
            SidebarMode::Docked
        );
        assert_eq!(
            SidebarMode::for_layout(Breakpoint::Tablet, Orientation::Landscape),
            SidebarMode::Docked
        );
        assert_eq!(
            SidebarMode::for_layout(Breakpoint::Tablet, Orientation::Portrait),
            SidebarMode::Overlay
        );
        assert_eq!(
            SidebarMode::for_layout(Breakpoint::Mobile, Orientation::Landscape),
            SidebarMode::Overlay
        );
    }

    #[test]
    fn docked_defaults_depend_on_breakpoint() {
        let desktop = SidebarSet::new(viewport(1440, 900), SidebarPrefs::default());
        assert_eq!(
            desktop.state(SidebarId::Navigation),
            SidebarState {
                open: true,
                expanded: true
            }
        );
        let tablet = SidebarSet::new(viewport(1024, 768), SidebarPrefs::default());
        assert_eq!(
            tablet.state(SidebarId::Navigation),
            SidebarState {
                open: true,
                expanded: false
            }
        );
    }

    #[test]
    fn docked_toggle_flips_expanded_and_persists() {
        let mut set = SidebarSet::new(viewport(1440, 900), SidebarPrefs::default());
        let effect = set.toggle(SidebarId::Details);
        assert!(effect.persist);
        assert!(!effect.state.expanded);
        assert!(effect.state.open);
        assert_eq!(set.prefs().to_json(), r#"{"details":{"expanded":false}}"#);
    }

    #[test]
    fn stored_preference_survives_layout_changes() {
        let prefs = SidebarPrefs::parse(r#"{"navigation":{"expanded":false}}"#);
        let mut set = SidebarSet::new(viewport(1440, 900), prefs);
        assert!(!set.state(SidebarId::Navigation).expanded);
        assert!(set.apply_layout(viewport(375, 667)));
        assert_eq!(
            set.state(SidebarId::Navigation),
            SidebarState {
                open: false,
                expanded: true
            }
        );
        assert!(set.apply_layout(viewport(1440, 900)));
        assert!(!set.state(SidebarId::Navigation).expanded);
    }

    #[test]
    fn overlay_toggle_keeps_single_sidebar_open() {
        let mut set = SidebarSet::new(viewport(375, 667), SidebarPrefs::default());
        let effect = set.toggle(SidebarId::Navigation);
        assert!(!effect.persist);
        assert!(effect.state.open);
        set.toggle(SidebarId::Details);
        assert!(!set.state(SidebarId::Navigation).open);
        assert!(set.state(SidebarId::Details).open);
        assert!(set.overlay_open());
        assert!(set.close_overlays());
        assert!(!set.overlay_open());
        assert!(!set.close_overlays());
    }

    #[test]
    fn close_overlays_is_noop_when_docked() {
        let mut set = SidebarSet::new(viewport(1440, 900), SidebarPrefs::default());
        assert!(!set.close_overlays());
        assert!(set.state(SidebarId::Navigation).open);
    }

    #[test]
    fn same_layout_reports_no_change() {
        let mut set = SidebarSet::new(viewport(1440, 900), SidebarPrefs::default());
        assert!(!set.apply_layout(viewport(1600, 900)));
    }

    #[test]
    fn corrupt_prefs_fall_back_to_defaults() {
        assert_eq!(SidebarPrefs::parse("not json"), SidebarPrefs::default());
        assert_eq!(SidebarPrefs::parse("[1,2]"), SidebarPrefs::default());
    }
}
