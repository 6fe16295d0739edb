//! Harness configuration.
//!
//! ```toml
//! explicit_raise = true
//! explicit_return = false
//! verbose_logging = false
//! order = "alphabetical"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Order in which definitions and their methods are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryOrder {
    /// Order of registration in the manifest
    #[default]
    Declaration,
    /// Sorted by name, like reflective enumeration
    Alphabetical,
}

/// Flags selected at harness invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Return an error if any test failed
    pub explicit_raise: bool,
    /// Hand the failure records back to the caller
    pub explicit_return: bool,
    /// Record full traces instead of short messages
    pub verbose_logging: bool,
    /// Discovery order for definitions and methods
    pub order: DiscoveryOrder,
}

impl HarnessConfig {
    /// Default configuration: log only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fail-fast flag.
    pub fn with_explicit_raise(mut self, enabled: bool) -> Self {
        self.explicit_raise = enabled;
        self
    }

    /// Set the structured-output flag.
    pub fn with_explicit_return(mut self, enabled: bool) -> Self {
        self.explicit_return = enabled;
        self
    }

    /// Set the trace flag.
    pub fn with_verbose_logging(mut self, enabled: bool) -> Self {
        self.verbose_logging = enabled;
        self
    }

    /// Set the discovery order.
    pub fn with_order(mut self, order: DiscoveryOrder) -> Self {
        self.order = order;
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ConfigParse`] if the text is not valid TOML or
    /// a key has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ConfigRead`] if the file cannot be read and
    /// [`HarnessError::ConfigParse`] if its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
