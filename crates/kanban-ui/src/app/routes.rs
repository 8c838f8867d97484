//! Routing definitions for the kanban UI.
use crate::core::nav::Tab;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/board")]
    Board,
    #[at("/backlog")]
    Backlog,
    #[at("/sprints")]
    Sprints,
    #[at("/reports")]
    Reports,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Tab addressed by this route; `None` for the landing and fallback routes.
    pub(crate) const fn tab(&self) -> Option<Tab> {
        match self {
            Self::Board => Some(Tab::Board),
            Self::Backlog => Some(Tab::Backlog),
            Self::Sprints => Some(Tab::Sprints),
            Self::Reports => Some(Tab::Reports),
            Self::Settings => Some(Tab::Settings),
            Self::Home | Self::NotFound => None,
        }
    }

    pub(crate) const fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Board => Self::Board,
            Tab::Backlog => Self::Backlog,
            Tab::Sprints => Self::Sprints,
            Tab::Reports => Self::Reports,
            Tab::Settings => Self::Settings,
        }
    }
}
