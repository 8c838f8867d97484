//! Application tabs shared by the drawer, header and router.

/// Top-level navigation tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Kanban board.
    #[default]
    Board,
    /// Product backlog.
    Backlog,
    /// Sprint planning.
    Sprints,
    /// Reports and charts.
    Reports,
    /// Project settings.
    Settings,
}

impl Tab {
    /// Tabs in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Board,
        Self::Backlog,
        Self::Sprints,
        Self::Reports,
        Self::Settings,
    ];

    /// Stable identifier for storage and events.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Backlog => "backlog",
            Self::Sprints => "sprints",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    /// Compact label for narrow headers and nav items.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Backlog => "Backlog",
            Self::Sprints => "Sprints",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Descriptive label for wider headers and the document title.
    #[must_use]
    pub const fn full_label(self) -> &'static str {
        match self {
            Self::Board => "Kanban board",
            Self::Backlog => "Product backlog",
            Self::Sprints => "Sprint planning",
            Self::Reports => "Reports",
            Self::Settings => "Project settings",
        }
    }

    /// Glyph shown next to the label in the drawer and collapsed sidebar.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Board => "▦",
            Self::Backlog => "☰",
            Self::Sprints => "⟳",
            Self::Reports => "▤",
            Self::Settings => "⚙",
        }
    }

    /// Parse a value produced by [`Tab::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn keys_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(Tab::from_key("unknown"), None);
    }

    #[test]
    fn default_tab_is_board() {
        assert_eq!(Tab::default(), Tab::Board);
    }
}
