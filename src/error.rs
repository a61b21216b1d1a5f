//! Error types for arena configuration.
//!
//! The physics core itself never fails; only loading and validating a
//! configuration can.

use thiserror::Error;

/// Errors that can occur while loading or validating an [`ArenaConfig`](crate::ArenaConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON.
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A value is outside its allowed range.
    #[error("invalid {field}: {value} ({reason})")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl ConfigError {
    /// Creates an out-of-range error.
    pub fn out_of_range(field: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            reason,
        }
    }
}
