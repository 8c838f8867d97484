//! Yew components for the responsive shell.

pub(crate) mod drawer;
pub(crate) mod hamburger;
pub(crate) mod header;
pub(crate) mod kanban;
pub(crate) mod shell;
pub(crate) mod sidebar;
