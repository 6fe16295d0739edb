//! Error types for the harness.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::report::{self, FailureRecord};

/// Errors a harness invocation can return.
///
/// Individual test failures never surface here on their own; they are
/// recorded and logged. Only the aggregate [`TestsFailed`](Self::TestsFailed)
/// carries them out, and only when `explicit_raise` is set.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// At least one test failed and the caller asked for fail-fast semantics.
    #[error("{message}")]
    TestsFailed {
        /// Number of failed test methods
        count: usize,
        /// `<count> failed: ` followed by every failure, newline-joined
        message: String,
        /// The failures, in module-then-method order
        failures: Vec<FailureRecord>,
    },

    /// A configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid TOML for [`HarnessConfig`](crate::HarnessConfig).
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl HarnessError {
    /// Build the aggregate failure for `failures`.
    pub fn tests_failed(failures: Vec<FailureRecord>) -> Self {
        Self::TestsFailed {
            count: failures.len(),
            message: report::raise_message(&failures),
            failures,
        }
    }

    /// The failure records carried by an aggregate failure, if any.
    pub fn failures(&self) -> &[FailureRecord] {
        match self {
            Self::TestsFailed { failures, .. } => failures,
            _ => &[],
        }
    }
}

/// A specialized [`Result`] type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
