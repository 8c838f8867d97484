//! Chromium discovery, launch and per-viewport page setup.

use crate::error::{SmokeError, SmokeResult};
use crate::viewport::ViewportPreset;
use anyhow::{Context, anyhow};
use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::{
    SetDeviceMetricsOverrideParams, SetTouchEmulationEnabledParams,
};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

/// How to start the browser.
#[derive(Debug, Clone)]
pub(crate) struct LaunchOptions {
    pub(crate) chrome: Option<PathBuf>,
    pub(crate) headful: bool,
    pub(crate) timeout: Duration,
}

/// Running browser plus the task draining its CDP event stream.
pub(crate) struct SmokeBrowser {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl SmokeBrowser {
    pub(crate) async fn launch(options: &LaunchOptions) -> SmokeResult<Self> {
        let executable = resolve_executable(options.chrome.as_deref())?;
        tracing::debug!(executable = %executable.display(), headful = options.headful, "launching chromium");

        let builder = BrowserConfig::builder()
            .chrome_executable(executable)
            .request_timeout(options.timeout)
            .args(vec![
                "--disable-gpu",
                "--no-first-run",
                "--no-default-browser-check",
            ]);
        let builder = if options.headful {
            builder.with_head()
        } else {
            builder.new_headless_mode()
        };
        let config = builder
            .build()
            .map_err(|err| SmokeError::failure(anyhow!("failed to configure chromium: {err}")))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch chromium")
            .map_err(SmokeError::failure)?;
        let handler = tokio::spawn(async move { while let Some(_event) = handler.next().await {} });

        Ok(Self { browser, handler })
    }

    /// Open a fresh page sized for `preset` and load the app.
    pub(crate) async fn open(&self, url: &Url, preset: ViewportPreset) -> SmokeResult<Page> {
        let metrics = preset.metrics();
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("failed to create page")
            .map_err(SmokeError::failure)?;
        page.execute(SetDeviceMetricsOverrideParams::new(
            i64::from(metrics.width),
            i64::from(metrics.height),
            1.0,
            metrics.touch,
        ))
        .await
        .with_context(|| format!("failed to emulate {preset} metrics"))
        .map_err(SmokeError::failure)?;
        page.execute(SetTouchEmulationEnabledParams::new(metrics.touch))
            .await
            .with_context(|| format!("failed to set touch emulation for {preset}"))
            .map_err(SmokeError::failure)?;
        page.goto(url.as_str())
            .await
            .with_context(|| format!("navigation to {url} failed"))
            .map_err(SmokeError::failure)?;
        Ok(page)
    }

    pub(crate) async fn shutdown(mut self) {
        if let Err(err) = self.browser.close().await {
            tracing::debug!(error = %err, "browser close failed");
        }
        self.handler.abort();
    }
}

fn resolve_executable(explicit: Option<&Path>) -> SmokeResult<PathBuf> {
    match explicit {
        Some(path) if path.exists() => Ok(path.to_path_buf()),
        Some(path) => Err(SmokeError::validation(format!(
            "chromium executable not found at {}",
            path.display()
        ))),
        None => find_chromium().ok_or_else(|| {
            SmokeError::failure(anyhow!(
                "chromium executable not found; pass --chrome or set KANBAN_SMOKE_CHROME"
            ))
        }),
    }
}

fn find_chromium() -> Option<PathBuf> {
    if let Some(path) = find_on_path(&chromium_candidates()) {
        return Some(path);
    }
    platform_chromium_paths()
        .into_iter()
        .find(|path| path.exists())
}

fn find_on_path(candidates: &[&str]) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .flat_map(|dir| candidates.iter().map(move |candidate| dir.join(candidate)))
        .find(|full| full.exists())
}

#[cfg(target_os = "windows")]
fn chromium_candidates() -> Vec<&'static str> {
    vec!["chromium.exe", "chrome.exe"]
}

#[cfg(target_os = "macos")]
fn chromium_candidates() -> Vec<&'static str> {
    vec!["chromium", "google-chrome", "chrome"]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn chromium_candidates() -> Vec<&'static str> {
    vec![
        "chromium",
        "chromium-browser",
        "google-chrome",
        "google-chrome-stable",
    ]
}

#[cfg(target_os = "windows")]
fn platform_chromium_paths() -> Vec<PathBuf> {
    std::env::var_os("ProgramFiles")
        .map(PathBuf::from)
        .map(|base| {
            vec![
                base.join("Google/Chrome/Application/chrome.exe"),
                base.join("Chromium/Application/chrome.exe"),
            ]
        })
        .unwrap_or_default()
}

#[cfg(target_os = "macos")]
fn platform_chromium_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
    ]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_chromium_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/bin/chromium"),
        PathBuf::from("/usr/bin/chromium-browser"),
        PathBuf::from("/usr/bin/google-chrome"),
        PathBuf::from("/snap/bin/chromium"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_executable_is_a_usage_error() {
        let err = resolve_executable(Some(Path::new("/definitely/not/chromium")))
            .expect_err("missing binary rejected");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("/definitely/not/chromium"));
    }

    #[test]
    fn candidates_are_not_empty() {
        assert!(!chromium_candidates().is_empty());
        assert!(!platform_chromium_paths().is_empty());
    }
}
