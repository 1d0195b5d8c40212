//! Typed errors raised while running readiness checks

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors a readiness check can hit at its point of use.
///
/// None of these abort a run: the runner converts each one into a failed
/// outcome with a [`FailureReason`](crate::core::models::FailureReason).
#[derive(Debug, Error)]
pub enum CheckError {
    /// A site file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A site file is not valid UTF-8
    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 {
        /// Offending file
        path: PathBuf,
    },

    /// The resume generator could not be started
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        /// Program that was being started
        program: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The status artifact could not be serialized
    #[error("failed to serialize deployment info: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A config override file is malformed
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file that was parsed
        path: PathBuf,
        /// Parse error
        source: toml::de::Error,
    },
}
