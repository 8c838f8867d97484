//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod config;
pub mod device;
pub mod drawer;
pub mod events;
pub mod header;
pub mod http;
pub mod models;
pub mod nav;
pub mod pager;
pub mod sidebar;
pub mod store;
pub mod swipe;
