//! Shell events exchanged between sibling UI modules.
//!
//! # Design
//! - Components talk through the store reducer; the same events are mirrored to
//!   `document` as `CustomEvent`s so page scripts can observe or trigger them.
//! - Mirrored events carry a source marker so the app ignores its own echoes.

use crate::core::breakpoints::Breakpoint;
use crate::core::nav::Tab;
use crate::core::sidebar::SidebarId;
use serde::{Deserialize, Serialize};

/// Source marker stamped on events the app mirrors to the DOM.
pub const EVENT_SOURCE: &str = "kanban-ui";

/// Every DOM event name the shell listens for.
pub const LISTENED_EVENTS: [&str; 4] = ["drawer:toggle", "drawer:open", "drawer:close", "tab:change"];

/// Named UI event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// Flip the drawer.
    DrawerToggle,
    /// Open the drawer.
    DrawerOpen,
    /// Close the drawer.
    DrawerClose,
    /// Activate a tab.
    TabChange(Tab),
    /// Breakpoint classification changed.
    BreakpointChange(Breakpoint),
    /// User toggled a sidebar.
    SidebarToggle(SidebarId),
    /// Dismiss the drawer and any overlay sidebar (Escape).
    Dismiss,
}

/// JSON payload carried in a mirrored event's `detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    /// Emitter marker; [`EVENT_SOURCE`] for app-originated events.
    #[serde(default)]
    pub source: Option<String>,
    /// Event-specific value (tab key, breakpoint name, sidebar key).
    #[serde(default)]
    pub value: Option<String>,
}

impl ShellEvent {
    /// DOM event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DrawerToggle => "drawer:toggle",
            Self::DrawerOpen => "drawer:open",
            Self::DrawerClose => "drawer:close",
            Self::TabChange(_) => "tab:change",
            Self::BreakpointChange(_) => "breakpoint:change",
            Self::SidebarToggle(_) => "sidebar:toggle",
            Self::Dismiss => "shell:dismiss",
        }
    }

    /// Detail payload for mirroring this event to the DOM.
    #[must_use]
    pub fn detail(self) -> EventDetail {
        let value = match self {
            Self::TabChange(tab) => Some(tab.key().to_string()),
            Self::BreakpointChange(bp) => Some(bp.as_str().to_string()),
            Self::SidebarToggle(id) => Some(id.key().to_string()),
            Self::DrawerToggle | Self::DrawerOpen | Self::DrawerClose | Self::Dismiss => None,
        };
        EventDetail {
            source: Some(EVENT_SOURCE.to_string()),
            value,
        }
    }

    /// Serialized detail string for a `CustomEvent`.
    #[must_use]
    pub fn detail_json(self) -> String {
        serde_json::to_string(&self.detail()).unwrap_or_default()
    }

    /// Interpret an externally dispatched DOM event.
    ///
    /// Returns `None` for unknown names, malformed payloads, and the app's own echoes.
    #[must_use]
    pub fn from_dom(name: &str, detail: Option<&str>) -> Option<Self> {
        let detail: EventDetail = match detail.map(str::trim) {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw).unwrap_or_else(|_| {
                EventDetail {
                    source: None,
                    value: Some(raw.to_string()),
                }
            }),
            _ => EventDetail::default(),
        };
        if detail.source.as_deref() == Some(EVENT_SOURCE) {
            return None;
        }
        match name {
            "drawer:toggle" => Some(Self::DrawerToggle),
            "drawer:open" => Some(Self::DrawerOpen),
            "drawer:close" => Some(Self::DrawerClose),
            "tab:change" => detail
                .value
                .as_deref()
                .and_then(Tab::from_key)
                .map(Self::TabChange),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_namespace_convention() {
        assert_eq!(ShellEvent::DrawerToggle.name(), "drawer:toggle");
        assert_eq!(ShellEvent::TabChange(Tab::Board).name(), "tab:change");
        assert_eq!(
            ShellEvent::BreakpointChange(Breakpoint::Mobile).name(),
            "breakpoint:change"
        );
    }

    #[test]
    fn own_echoes_are_ignored() {
        let event = ShellEvent::DrawerOpen;
        let detail = event.detail_json();
        assert_eq!(ShellEvent::from_dom(event.name(), Some(&detail)), None);
    }

    #[test]
    fn external_events_are_accepted() {
        assert_eq!(
            ShellEvent::from_dom("drawer:toggle", None),
            Some(ShellEvent::DrawerToggle)
        );
        assert_eq!(
            ShellEvent::from_dom("tab:change", Some(r#"{"value":"reports"}"#)),
            Some(ShellEvent::TabChange(Tab::Reports))
        );
        assert_eq!(
            ShellEvent::from_dom("tab:change", Some("backlog")),
            Some(ShellEvent::TabChange(Tab::Backlog))
        );
    }

    #[test]
    fn unknown_or_incomplete_events_are_rejected() {
        assert_eq!(ShellEvent::from_dom("drawer:explode", None), None);
        assert_eq!(ShellEvent::from_dom("tab:change", None), None);
        assert_eq!(ShellEvent::from_dom("tab:change", Some("nowhere")), None);
    }

    #[test]
    fn detail_carries_values() {
        let detail = ShellEvent::SidebarToggle(SidebarId::Details).detail();
        assert_eq!(detail.source.as_deref(), Some(EVENT_SOURCE));
        assert_eq!(detail.value.as_deref(), Some("details"));
        assert_eq!(ShellEvent::DrawerClose.detail().value, None);
    }
}
