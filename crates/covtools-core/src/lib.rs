#![warn(missing_docs)]

//! Covtools Core Library
//!
//! Pure text-analysis logic behind the covtools binaries: requirement
//! coverage tallying, kill-script generation, and log-to-gnuplot bucketing.
//! Everything here is a synchronous read-transform-print pipeline over
//! strings; file I/O lives in the CLI crate.
//!
//! # Modules
//!
//! - [`coverage`] - paragraph segmentation and status classification
//! - [`report`] - coverage report rendering
//! - [`killscript`] - process kill-script generation
//! - [`logplot`] - log timestamp parsing and per-second bucketing

pub mod coverage;
pub mod error;
pub mod killscript;
pub mod logplot;
pub mod report;

pub use coverage::{CoverageStatus, SpecDocument, Statement};
pub use error::CoreError;
pub use killscript::{render_kill_script, KillOrder, DEFAULT_PROCESSES};
pub use logplot::{bucket_lines, compile_filter, parse_timestamp, render_series, SeriesSpec};
pub use report::render_summary;
