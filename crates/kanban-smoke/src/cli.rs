//! Argument parsing, validation and the top-level smoke runner.

use crate::browser::{LaunchOptions, SmokeBrowser};
use crate::checks::run_checks;
use crate::error::{SmokeError, SmokeResult};
use crate::logging::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use crate::report::Report;
use crate::viewport::ViewportPreset;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Parser)]
#[command(
    name = "kanban-smoke",
    about = "Drive the kanban UI in headless Chromium across device sizes"
)]
struct Cli {
    #[arg(long, env = "KANBAN_SMOKE_URL", default_value = DEFAULT_URL)]
    url: String,
    #[arg(long, env = "KANBAN_SMOKE_CHROME", help = "Path to a Chromium or Chrome binary")]
    chrome: Option<PathBuf>,
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    #[arg(
        long = "viewport",
        value_enum,
        help = "Viewport to test; repeat for several (default: all)"
    )]
    viewports: Vec<ViewportPreset>,
    #[arg(long, help = "Show the browser window")]
    headful: bool,
    #[arg(long = "log-format", value_enum)]
    log_format: Option<LogFormat>,
}

/// Validated run settings.
#[derive(Debug, Clone)]
struct SmokePlan {
    url: Url,
    viewports: Vec<ViewportPreset>,
    launch: LaunchOptions,
}

impl Cli {
    fn plan(self) -> SmokeResult<SmokePlan> {
        let url = Url::parse(&self.url)
            .map_err(|err| SmokeError::validation(format!("invalid --url `{}`: {err}", self.url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SmokeError::validation(format!(
                "--url must be http or https, got `{}`",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SmokeError::validation("--timeout-secs must be at least 1"));
        }

        let mut viewports = if self.viewports.is_empty() {
            ViewportPreset::ALL.to_vec()
        } else {
            self.viewports
        };
        viewports.sort_unstable();
        viewports.dedup();

        Ok(SmokePlan {
            url,
            viewports,
            launch: LaunchOptions {
                chrome: self.chrome,
                headful: self.headful,
                timeout: Duration::from_secs(self.timeout_secs),
            },
        })
    }
}

/// Parses arguments, runs every requested viewport and prints the report.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            let _ = err.print();
            return code;
        }
    };

    let logging = LoggingConfig {
        level: DEFAULT_LOG_LEVEL,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let result = match cli.plan() {
        Ok(plan) => execute(&plan).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(report) => {
            println!("{}", report.render());
            report.exit_code()
        }
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}

async fn execute(plan: &SmokePlan) -> SmokeResult<Report> {
    tracing::info!(url = %plan.url, viewports = plan.viewports.len(), "starting smoke run");
    let browser = SmokeBrowser::launch(&plan.launch).await?;
    let outcome = run_viewports(&browser, plan).await;
    browser.shutdown().await;
    outcome
}

async fn run_viewports(browser: &SmokeBrowser, plan: &SmokePlan) -> SmokeResult<Report> {
    let mut report = Report::default();
    for preset in &plan.viewports {
        tracing::info!(viewport = %preset, "opening page");
        let page = tokio::time::timeout(plan.launch.timeout, browser.open(&plan.url, *preset))
            .await
            .map_err(|_| {
                SmokeError::failure(anyhow::anyhow!(
                    "loading {} timed out for {preset}",
                    plan.url
                ))
            })??;
        for result in run_checks(&page, *preset, plan.launch.timeout).await {
            report.record(result);
        }
        if let Err(err) = page.close().await {
            tracing::debug!(error = %err, "page close failed");
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["kanban-smoke"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments parse")
    }

    #[test]
    fn defaults_cover_every_viewport() {
        let plan = parse(&["--url", "http://localhost:8080"])
            .plan()
            .expect("valid plan");
        assert_eq!(plan.viewports, ViewportPreset::ALL.to_vec());
        assert_eq!(plan.launch.timeout, Duration::from_secs(20));
        assert!(!plan.launch.headful);
    }

    #[test]
    fn repeated_viewports_are_deduplicated() {
        let plan = parse(&[
            "--url",
            "https://kanban.example",
            "--viewport",
            "desktop",
            "--viewport",
            "mobile",
            "--viewport",
            "desktop",
            "--headful",
            "--timeout-secs",
            "5",
        ])
        .plan()
        .expect("valid plan");
        assert_eq!(
            plan.viewports,
            vec![ViewportPreset::Mobile, ViewportPreset::Desktop]
        );
        assert!(plan.launch.headful);
        assert_eq!(plan.launch.timeout, Duration::from_secs(5));
    }

    #[test]
    fn log_format_is_optional() {
        assert_eq!(parse(&["--url", "http://x"]).log_format, None);
        assert_eq!(
            parse(&["--url", "http://x", "--log-format", "json"]).log_format,
            Some(LogFormat::Json)
        );
    }

    #[test]
    fn unknown_viewport_is_rejected_by_clap() {
        let err = Cli::try_parse_from(["kanban-smoke", "--viewport", "watch"])
            .expect_err("unknown preset");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn invalid_url_and_zero_timeout_are_validation_errors() {
        let err = parse(&["--url", "not a url"]).plan().expect_err("bad url");
        assert_eq!(err.exit_code(), 2);

        let err = parse(&["--url", "ftp://host/board"]).plan().expect_err("bad scheme");
        assert!(err.to_string().contains("http or https"));

        let err = parse(&["--url", "http://x", "--timeout-secs", "0"])
            .plan()
            .expect_err("zero timeout");
        assert!(matches!(err, SmokeError::Validation(message) if message.contains("timeout")));
    }
}
