//! Header and document title derived from the active tab and breakpoint.

use crate::core::breakpoints::Breakpoint;
use crate::core::config::APP_NAME;
use crate::core::nav::Tab;

/// Inputs that drive the header title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderContext<'a> {
    /// Active navigation tab.
    pub tab: Tab,
    /// Active breakpoint.
    pub breakpoint: Breakpoint,
    /// Name of the loaded board, if any.
    pub board_name: Option<&'a str>,
}

/// Text rendered in the header title slot.
#[must_use]
pub fn header_title(ctx: HeaderContext<'_>) -> String {
    match ctx.breakpoint {
        Breakpoint::Mobile => ctx.tab.short_label().to_string(),
        Breakpoint::Tablet => ctx.tab.full_label().to_string(),
        Breakpoint::Desktop => {
            let detail = match (ctx.tab, board_name(ctx.board_name)) {
                (Tab::Board, Some(name)) => name,
                _ => ctx.tab.full_label(),
            };
            format!("{APP_NAME} / {detail}")
        }
    }
}

/// Value for `document.title`.
#[must_use]
pub fn document_title(tab: Tab) -> String {
    format!("{} | {APP_NAME}", tab.full_label())
}

fn board_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(tab: Tab, breakpoint: Breakpoint, board_name: Option<&str>) -> HeaderContext<'_> {
        HeaderContext {
            tab,
            breakpoint,
            board_name,
        }
    }

    #[test]
    fn mobile_uses_short_label() {
        assert_eq!(
            header_title(ctx(Tab::Backlog, Breakpoint::Mobile, None)),
            "Backlog"
        );
    }

    #[test]
    fn tablet_uses_full_label() {
        assert_eq!(
            header_title(ctx(Tab::Sprints, Breakpoint::Tablet, Some("Roadmap"))),
            "Sprint planning"
        );
    }

    #[test]
    fn desktop_prefers_board_name_on_board_tab() {
        assert_eq!(
            header_title(ctx(Tab::Board, Breakpoint::Desktop, Some("Roadmap"))),
            "Kanban / Roadmap"
        );
        assert_eq!(
            header_title(ctx(Tab::Board, Breakpoint::Desktop, Some("  "))),
            "Kanban / Kanban board"
        );
        assert_eq!(
            header_title(ctx(Tab::Reports, Breakpoint::Desktop, Some("Roadmap"))),
            "Kanban / Reports"
        );
    }

    #[test]
    fn document_title_puts_page_first() {
        assert_eq!(document_title(Tab::Settings), "Project settings | Kanban");
    }
}
