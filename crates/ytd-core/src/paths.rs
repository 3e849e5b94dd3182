//! Default locations: cookie file, downloads folder, output template.

use crate::error::YtdError;
use crate::format::OUTPUT_FILE_TEMPLATE;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// XDG prefix for config, state and cookie storage.
pub const APP_PREFIX: &str = "ytd";

/// Cookie file location relative to the config dir.
const COOKIE_SUBPATH: &str = "yt-cookies/cookies.txt";

/// `~/.config/ytd/yt-cookies/cookies.txt` (honours `XDG_CONFIG_HOME`).
pub fn default_cookie_file() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs
        .get_config_home()
        .join(APP_PREFIX)
        .join(COOKIE_SUBPATH))
}

/// `~/Downloads`.
pub fn default_download_dir() -> Result<PathBuf, YtdError> {
    let home = dirs::home_dir().ok_or(YtdError::NoHomeDir)?;
    Ok(home.join("Downloads"))
}

/// Output template rooted at `download_dir`, e.g. `/home/u/Downloads/%(title)s.%(ext)s`.
pub fn output_template(download_dir: &Path) -> String {
    download_dir
        .join(OUTPUT_FILE_TEMPLATE)
        .to_string_lossy()
        .into_owned()
}

/// Creates `dir` and its parents if absent.
pub fn ensure_dir(dir: &Path) -> Result<(), YtdError> {
    fs::create_dir_all(dir).map_err(|source| YtdError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Like [`ensure_dir`], but a newly created leaf directory is private (0700 on unix).
/// An existing directory keeps its permissions.
pub fn ensure_private_dir(dir: &Path) -> Result<(), YtdError> {
    if dir.is_dir() {
        return Ok(());
    }
    if let Some(parent) = dir.parent() {
        ensure_dir(parent)?;
    }
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    match builder.create(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(YtdError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
