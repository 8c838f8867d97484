//! Check results and the final exit status.

use crate::viewport::ViewportPreset;
use std::fmt::Write as _;

/// Outcome of a single check on one viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckResult {
    pub(crate) viewport: ViewportPreset,
    pub(crate) name: &'static str,
    pub(crate) passed: bool,
    pub(crate) detail: Option<String>,
}

impl CheckResult {
    pub(crate) const fn pass(viewport: ViewportPreset, name: &'static str) -> Self {
        Self {
            viewport,
            name,
            passed: true,
            detail: None,
        }
    }

    pub(crate) fn fail(viewport: ViewportPreset, name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            viewport,
            name,
            passed: false,
            detail: Some(detail.into()),
        }
    }

    /// One report line, e.g. `PASS mobile  body-class`.
    pub(crate) fn line(&self) -> String {
        let status = if self.passed { "PASS" } else { "FAIL" };
        let mut line = format!("{status} {:<17}{}", self.viewport.as_str(), self.name);
        if let Some(detail) = &self.detail {
            let _ = write!(line, ": {detail}");
        }
        line
    }
}

/// Aggregated results of a smoke run.
#[derive(Debug, Default, Clone)]
pub(crate) struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    pub(crate) fn record(&mut self, result: CheckResult) {
        if result.passed {
            tracing::info!(viewport = %result.viewport, check = result.name, "check passed");
        } else {
            tracing::warn!(
                viewport = %result.viewport,
                check = result.name,
                detail = result.detail.as_deref().unwrap_or(""),
                "check failed"
            );
        }
        self.results.push(result);
    }

    pub(crate) fn passed(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    pub(crate) fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// `0` when at least one check ran and none failed, `1` otherwise.
    pub(crate) fn exit_code(&self) -> i32 {
        if self.results.is_empty() || self.failed() > 0 {
            1
        } else {
            0
        }
    }

    pub(crate) fn summary(&self) -> String {
        format!(
            "{} checks: {} passed, {} failed",
            self.results.len(),
            self.passed(),
            self.failed()
        )
    }

    /// Full human-readable report.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let _ = writeln!(out, "{}", result.line());
        }
        out.push_str(&self.summary());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_passing_checks_exit_zero() {
        let mut report = Report::default();
        report.record(CheckResult::pass(ViewportPreset::Mobile, "body-class"));
        report.record(CheckResult::pass(ViewportPreset::Desktop, "header-title"));
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.summary(), "2 checks: 2 passed, 0 failed");
    }

    #[test]
    fn any_failure_exits_one() {
        let mut report = Report::default();
        report.record(CheckResult::pass(ViewportPreset::Mobile, "body-class"));
        report.record(CheckResult::fail(
            ViewportPreset::Mobile,
            "swipe",
            "indicator stayed at 1 / 4",
        ));
        assert_eq!(report.failed(), 1);
        assert_eq!(report.exit_code(), 1);
        assert!(report.render().contains("FAIL mobile  swipe: indicator stayed at 1 / 4"));
    }

    #[test]
    fn empty_report_is_not_a_success() {
        assert_eq!(Report::default().exit_code(), 1);
    }

    #[test]
    fn lines_pad_viewport_names() {
        let line = CheckResult::pass(ViewportPreset::Tablet, "hamburger").line();
        assert_eq!(line, "PASS tablet           hamburger");
        let line =
            CheckResult::fail(ViewportPreset::TabletLandscape, "sidebar-mode", "docked").line();
        assert_eq!(line, "FAIL tablet-landscape sidebar-mode: docked");
    }
}
