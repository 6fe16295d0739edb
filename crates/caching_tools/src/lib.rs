#![forbid(unsafe_code)]

//! # Caching Tools
//!
//! Locates the cache directory shared with the Airflow workers. The cache
//! lives under the user's home directory at `gcs/data/cache`, mirroring the
//! layout of the mounted GCS bucket.
//!
//! ```rust,no_run
//! let path = caching_tools::airflow_cache_path().unwrap();
//! assert!(path.ends_with("gcs/data/cache"));
//! ```

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Cache location relative to the home directory.
pub const AIRFLOW_CACHE_SUBDIR: &str = "gcs/data/cache";

/// Errors raised while resolving cache paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No home directory could be determined for the current user.
    #[error("home directory is unavailable")]
    HomeDirUnavailable,
}

/// A specialized [`Result`] type for cache path lookups.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Path of the Airflow cache: `<home>/gcs/data/cache`.
///
/// # Errors
///
/// Returns [`CacheError::HomeDirUnavailable`] if the platform reports no
/// home directory.
pub fn airflow_cache_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or(CacheError::HomeDirUnavailable)?;
    Ok(airflow_cache_path_in(dirs.home_dir()))
}

/// Path of the Airflow cache below an explicit home directory.
pub fn airflow_cache_path_in(home: &Path) -> PathBuf {
    home.join(AIRFLOW_CACHE_SUBDIR)
}
