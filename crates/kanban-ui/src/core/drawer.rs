//! Mobile navigation drawer state.

/// Why the drawer closed; kept for diagnostics and focus handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// Hamburger or external toggle.
    Toggle,
    /// Overlay click.
    Overlay,
    /// Escape key.
    Escape,
    /// A nav item was selected.
    Navigate,
    /// Left swipe over the panel.
    Swipe,
    /// Viewport grew to desktop.
    Desktop,
    /// User signed out.
    Logout,
    /// Explicit `drawer:close` event.
    External,
}

/// Open/closed state of the drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
    last_close: Option<CloseReason>,
}

impl DrawerState {
    /// Whether the drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Reason for the most recent close.
    #[must_use]
    pub const fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Open the drawer. Returns whether it was closed before.
    pub const fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Close the drawer. Returns whether it was open before.
    pub const fn close(&mut self, reason: CloseReason) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.last_close = Some(reason);
        true
    }

    /// Flip the drawer. Returns the new open state.
    pub const fn toggle(&mut self) -> bool {
        if self.open {
            self.close(CloseReason::Toggle);
        } else {
            self.open();
        }
        self.open
    }

    /// ARIA label for the hamburger reflecting this state.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_records_reason() {
        let mut drawer = DrawerState::default();
        assert!(drawer.toggle());
        assert_eq!(drawer.toggle_label(), "Close menu");
        assert!(!drawer.toggle());
        assert_eq!(drawer.last_close(), Some(CloseReason::Toggle));
        assert_eq!(drawer.toggle_label(), "Open menu");
    }

    #[test]
    fn close_reports_whether_state_changed() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.close(CloseReason::Escape));
        assert_eq!(drawer.last_close(), None);
        assert!(drawer.open());
        assert!(!drawer.open());
        assert!(drawer.close(CloseReason::Swipe));
        assert_eq!(drawer.last_close(), Some(CloseReason::Swipe));
    }
}
