//! DOM assertions evaluated inside the page for one viewport.

use crate::report::CheckResult;
use crate::viewport::ViewportPreset;
use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::{Instant, sleep};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

const SHELL_READY: &str = "document.querySelector('.app-shell') !== null";
const HAMBURGER_PRESENT: &str = "document.querySelector('.hamburger') !== null";
const CLICK_HAMBURGER: &str = "(() => { const b = document.querySelector('.hamburger'); if (!b) return false; b.click(); return true; })()";
const DRAWER_OPEN: &str = "(() => { const d = document.getElementById('mobile-drawer'); return !!d && d.classList.contains('open') && document.body.classList.contains('drawer-open'); })()";
const DRAWER_CLOSED: &str = "(() => { const d = document.getElementById('mobile-drawer'); return !!d && !d.classList.contains('open'); })()";
const PRESS_ESCAPE: &str = "document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape', bubbles: true })), true";
const SIDEBAR_MODES: &str = "Array.from(document.querySelectorAll('aside.sidebar')).map((s) => s.classList.contains('docked'))";
const HEADER_TITLE: &str = "(() => { const h = document.querySelector('.header-title'); return h ? h.textContent.trim() : ''; })()";
const COLUMNS_READY: &str = "document.querySelectorAll('.kanban-column').length > 0";
const DOT_AND_COLUMN_COUNT: &str = "[document.querySelectorAll('.column-dot').length, document.querySelectorAll('.kanban-column').length]";
const RESET_TO_FIRST_COLUMN: &str = "(() => { const d = document.querySelector('.column-dot'); if (d) d.click(); return true; })()";
const INDICATOR_LABEL: &str = "(() => { const l = document.querySelector('.column-indicator-label'); return l ? l.textContent.trim() : ''; })()";
const SWIPE_LEFT: &str = r"(() => {
  const track = document.querySelector('.kanban-track');
  if (!track || typeof Touch === 'undefined') return false;
  const point = (x) => new Touch({ identifier: 1, target: track, clientX: x, clientY: 300 });
  const fire = (type, x, active) => {
    const touch = point(x);
    track.dispatchEvent(new TouchEvent(type, {
      touches: active ? [touch] : [],
      changedTouches: [touch],
      bubbles: true,
      cancelable: true,
    }));
  };
  fire('touchstart', 300, true);
  fire('touchmove', 280, true);
  fire('touchmove', 200, true);
  fire('touchmove', 120, true);
  fire('touchend', 120, false);
  return true;
})()";

fn body_has_class(class: &str) -> String {
    format!("document.body.classList.contains('{class}')")
}

async fn eval<T: DeserializeOwned>(page: &Page, script: &str) -> Result<T> {
    page.evaluate(script)
        .await
        .context("script evaluation failed")?
        .into_value::<T>()
        .context("unexpected script result")
}

/// Poll `script` until it yields `true` or the timeout elapses.
async fn wait_until(page: &Page, script: &str, timeout: Duration) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        if eval::<bool>(page, script).await? {
            return Ok(true);
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
        sleep(POLL_INTERVAL).await;
    }
}

fn settle(
    preset: ViewportPreset,
    name: &'static str,
    outcome: Result<Option<String>>,
) -> CheckResult {
    match outcome {
        Ok(None) => CheckResult::pass(preset, name),
        Ok(Some(problem)) => CheckResult::fail(preset, name, problem),
        Err(err) => CheckResult::fail(preset, name, format!("{err:#}")),
    }
}

/// Run every check that applies to `preset`.
pub(crate) async fn run_checks(
    page: &Page,
    preset: ViewportPreset,
    timeout: Duration,
) -> Vec<CheckResult> {
    let mut results = Vec::new();
    match wait_until(page, SHELL_READY, timeout).await {
        Ok(true) => results.push(CheckResult::pass(preset, "app-ready")),
        Ok(false) => {
            results.push(CheckResult::fail(preset, "app-ready", "shell never rendered"));
            return results;
        }
        Err(err) => {
            results.push(CheckResult::fail(preset, "app-ready", format!("{err:#}")));
            return results;
        }
    }

    results.push(settle(preset, "body-class", check_body_class(page, preset, timeout).await));
    results.push(settle(preset, "hamburger", check_hamburger(page, preset).await));
    if preset.is_narrow() {
        results.push(settle(preset, "drawer", check_drawer(page, timeout).await));
    }
    results.push(settle(preset, "header-title", check_header_title(page).await));
    results.push(settle(preset, "sidebar-mode", check_sidebar_mode(page, preset).await));
    if preset.is_paged() {
        results.push(settle(preset, "column-dots", check_dots(page, timeout).await));
        results.push(settle(preset, "swipe", check_swipe(page, timeout).await));
    }
    results
}

async fn check_body_class(
    page: &Page,
    preset: ViewportPreset,
    timeout: Duration,
) -> Result<Option<String>> {
    let class = preset.expected_body_class();
    if wait_until(page, &body_has_class(class), timeout).await? {
        Ok(None)
    } else {
        let actual: String = eval(page, "document.body.className").await?;
        Ok(Some(format!("expected `{class}`, body has `{actual}`")))
    }
}

async fn check_hamburger(page: &Page, preset: ViewportPreset) -> Result<Option<String>> {
    let present: bool = eval(page, HAMBURGER_PRESENT).await?;
    Ok(match (preset.is_narrow(), present) {
        (true, false) => Some("hamburger missing on a narrow layout".to_string()),
        (false, true) => Some("hamburger rendered on desktop".to_string()),
        _ => None,
    })
}

async fn check_drawer(page: &Page, timeout: Duration) -> Result<Option<String>> {
    if !eval::<bool>(page, CLICK_HAMBURGER).await? {
        return Ok(Some("nothing to click".to_string()));
    }
    if !wait_until(page, DRAWER_OPEN, timeout).await? {
        return Ok(Some("drawer did not open".to_string()));
    }
    let _: bool = eval(page, PRESS_ESCAPE).await?;
    if !wait_until(page, DRAWER_CLOSED, timeout).await? {
        return Ok(Some("Escape did not close the drawer".to_string()));
    }
    Ok(None)
}

async fn check_header_title(page: &Page) -> Result<Option<String>> {
    let title: String = eval(page, HEADER_TITLE).await?;
    Ok(title.is_empty().then(|| "header title is empty".to_string()))
}

async fn check_sidebar_mode(page: &Page, preset: ViewportPreset) -> Result<Option<String>> {
    let docked: Vec<bool> = eval(page, SIDEBAR_MODES).await?;
    Ok(sidebar_mode_problem(preset.docks_sidebars(), &docked))
}

fn sidebar_mode_problem(expect_docked: bool, docked: &[bool]) -> Option<String> {
    if docked.is_empty() {
        return Some("no sidebars rendered".to_string());
    }
    let wrong = docked.iter().filter(|&&d| d != expect_docked).count();
    let expected = if expect_docked { "docked" } else { "overlay" };
    (wrong > 0).then(|| format!("{wrong} of {} sidebars are not {expected}", docked.len()))
}

async fn check_dots(page: &Page, timeout: Duration) -> Result<Option<String>> {
    if !wait_until(page, COLUMNS_READY, timeout).await? {
        return Ok(Some("board columns never rendered".to_string()));
    }
    let (dots, columns): (usize, usize) = eval(page, DOT_AND_COLUMN_COUNT).await?;
    Ok((dots != columns).then(|| format!("{dots} dots for {columns} columns")))
}

async fn check_swipe(page: &Page, timeout: Duration) -> Result<Option<String>> {
    let _: bool = eval(page, RESET_TO_FIRST_COLUMN).await?;
    sleep(POLL_INTERVAL).await;
    let before: String = eval(page, INDICATOR_LABEL).await?;
    if !eval::<bool>(page, SWIPE_LEFT).await? {
        return Ok(Some("touch events unavailable".to_string()));
    }
    let deadline = Instant::now() + timeout;
    loop {
        let after: String = eval(page, INDICATOR_LABEL).await?;
        if after != before {
            return Ok(None);
        }
        if Instant::now() >= deadline {
            return Ok(Some(format!("indicator stayed at `{before}`")));
        }
        sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_class_script_targets_expected_class() {
        assert_eq!(
            body_has_class("is-mobile"),
            "document.body.classList.contains('is-mobile')"
        );
    }

    #[test]
    fn sidebar_mode_counts_mismatches() {
        assert_eq!(sidebar_mode_problem(true, &[true, true]), None);
        assert_eq!(
            sidebar_mode_problem(true, &[true, false]),
            Some("1 of 2 sidebars are not docked".to_string())
        );
        assert_eq!(
            sidebar_mode_problem(false, &[true, true]),
            Some("2 of 2 sidebars are not overlay".to_string())
        );
        assert_eq!(
            sidebar_mode_problem(false, &[]),
            Some("no sidebars rendered".to_string())
        );
    }

    #[test]
    fn settle_maps_outcomes() {
        let preset = ViewportPreset::Mobile;
        assert!(settle(preset, "a", Ok(None)).passed);
        let failed = settle(preset, "b", Ok(Some("nope".to_string())));
        assert_eq!(failed.detail.as_deref(), Some("nope"));
        let errored = settle(preset, "c", Err(anyhow::anyhow!("boom")));
        assert!(!errored.passed);
        assert_eq!(errored.detail.as_deref(), Some("boom"));
    }
}
