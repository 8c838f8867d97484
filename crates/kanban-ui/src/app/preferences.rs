//! Persistence and environment helpers for the app shell.

use crate::core::config::{LOGIN_PATH, api_base_url_for};
use crate::core::nav::Tab;
use crate::core::sidebar::SidebarPrefs;
use anyhow::{Context, Result, anyhow};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

/// Written by the login page as a raw (non-JSON) string.
pub(crate) const TOKEN_KEY: &str = "kanban.auth.token";
pub(crate) const SIDEBARS_KEY: &str = "kanban.sidebars";
pub(crate) const TAB_KEY: &str = "kanban.tab";
const COLUMN_KEY_PREFIX: &str = "kanban.mobile.column.";

pub(crate) fn load_token() -> Option<String> {
    let value = LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

pub(crate) fn load_sidebar_prefs() -> SidebarPrefs {
    LocalStorage::raw()
        .get_item(SIDEBARS_KEY)
        .ok()
        .flatten()
        .map(|raw| SidebarPrefs::parse(&raw))
        .unwrap_or_default()
}

pub(crate) fn persist_sidebar_prefs(prefs: &SidebarPrefs) {
    if let Err(err) = write_raw(SIDEBARS_KEY, &prefs.to_json()) {
        log_storage_error("set", SIDEBARS_KEY, &format!("{err:#}"));
    }
}

pub(crate) fn load_tab() -> Tab {
    LocalStorage::get::<String>(TAB_KEY)
        .ok()
        .and_then(|key| Tab::from_key(&key))
        .unwrap_or_default()
}

pub(crate) fn persist_tab(tab: Tab) {
    set_storage(TAB_KEY, tab.key());
}

pub(crate) fn load_column(board_id: &str) -> Option<usize> {
    LocalStorage::get::<usize>(&column_key(board_id)).ok()
}

pub(crate) fn persist_column(board_id: &str, index: usize) {
    let key = column_key(board_id);
    if let Err(err) = LocalStorage::set(&key, index).context("column index not stored") {
        console::error!("storage operation failed", "set", key, format!("{err:#}"));
    }
}

pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| String::new());
    api_base_url_for(&href)
}

pub(crate) fn redirect_to_login() {
    if let Err(err) = window().location().set_href(LOGIN_PATH) {
        console::error!("login redirect failed", format!("{err:?}"));
    }
}

fn column_key(board_id: &str) -> String {
    format!("{COLUMN_KEY_PREFIX}{board_id}")
}

fn write_raw(key: &str, value: &str) -> Result<()> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|err| anyhow!("{err:?}"))
        .with_context(|| format!("raw write to {key} rejected"))
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
