//! Locating the external downloader executable.

use crate::error::YtdError;
use std::path::{Path, PathBuf};

/// Executable name searched on PATH when no override is given.
pub const DEFAULT_BINARY_NAME: &str = "yt-dlp";

/// Resolves the downloader path.
///
/// An explicit override containing a directory component is used as-is and
/// must exist. A bare name (override or `name`) is searched on PATH.
pub fn resolve_binary(explicit: Option<&Path>, name: &str) -> Result<PathBuf, YtdError> {
    if let Some(path) = explicit {
        if path.components().count() > 1 {
            if !path.exists() {
                return Err(YtdError::BinaryMissing(path.to_path_buf()));
            }
            tracing::debug!("using explicit downloader {}", path.display());
            return Ok(path.to_path_buf());
        }
        return search_path(&path.to_string_lossy());
    }
    search_path(name)
}

fn search_path(name: &str) -> Result<PathBuf, YtdError> {
    let found = which::which(name).map_err(|e| YtdError::ToolNotFound {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    tracing::debug!("resolved {} to {}", name, found.display());
    Ok(found)
}
