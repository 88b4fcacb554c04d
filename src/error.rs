//! Host-level errors
//!
//! The presenter itself never fails; these cover the host driving it.

use crate::lifecycle::Phase;
use std::path::PathBuf;

/// Errors raised while hosting an action sheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lifecycle hook was requested from a phase that cannot reach it.
    #[error("cannot move action sheet from {from} to {to}")]
    OutOfOrder {
        /// Phase the sheet was in.
        from: Phase,
        /// Phase that was requested.
        to: Phase,
    },

    /// A configuration file could not be read.
    #[error("failed to read config from {}", path.display())]
    ConfigRead {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config from {}", path.display())]
    ConfigParse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for host-level results.
pub type Result<T> = std::result::Result<T, Error>;
