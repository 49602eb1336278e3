//! Error types for the covtools core

use thiserror::Error;

/// Errors that can occur in the covtools core
#[derive(Debug, Error)]
pub enum CoreError {
    /// A series filter pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Log series arguments must come in file/pattern pairs
    #[error("Expected file/pattern pairs, got {count} arguments")]
    UnpairedSeries {
        /// Number of arguments actually given
        count: usize,
    },
}
