//! Crate-wide error definitions.
//!
//! Every failure in this crate is fatal to the run it occurs in: nothing is
//! retried or silently absorbed. Errors propagate to the external driver,
//! which decides whether to continue with the next (trace, strategy) pair.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// A trace file could not be opened or read.
    #[error("failed to read trace file {path}: {source}")]
    TraceIo {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A report file could not be written.
    #[error("failed to write report {path}: {source}")]
    ReportIo {
        /// Path of the report file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be read or parsed.
    #[error("failed to load config {path}: {reason}")]
    ConfigLoad {
        /// Path of the configuration file.
        path: PathBuf,
        /// What went wrong while reading or deserializing.
        reason: String,
    },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    Config(String),
}
