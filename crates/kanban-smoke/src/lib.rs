#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::multiple_crate_versions)]

//! Headless-browser smoke test for the responsive kanban UI.
//!
//! Layout:
//! - `cli.rs`: argument parsing, validation and the top-level runner
//! - `browser.rs`: Chromium discovery, launch and per-viewport pages
//! - `checks.rs`: DOM assertions evaluated inside the page
//! - `viewport.rs`: device presets
//! - `report.rs`: result aggregation and exit codes
//! - `logging.rs`: tracing subscriber setup

pub(crate) mod browser;
pub(crate) mod checks;
pub(crate) mod cli;
pub(crate) mod error;
pub(crate) mod logging;
pub(crate) mod report;
pub(crate) mod viewport;

pub use cli::run;
