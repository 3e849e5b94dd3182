use crate::login::DEFAULT_ACCOUNT;
use crate::paths::{self, APP_PREFIX};
use crate::tool::DEFAULT_BINARY_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_binary_name() -> String {
    DEFAULT_BINARY_NAME.to_string()
}

fn default_cookies_browser() -> String {
    "chrome".to_string()
}

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

fn default_true() -> bool {
    true
}

/// Global configuration loaded from `~/.config/ytd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtdConfig {
    /// Explicit downloader path. When unset, `binary_name` is looked up on PATH.
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Executable name searched on PATH.
    #[serde(default = "default_binary_name")]
    pub binary_name: String,
    /// Where downloads land (None = `~/Downloads`).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Cookie file location (None = `~/.config/ytd/yt-cookies/cookies.txt`).
    #[serde(default)]
    pub cookies_file: Option<PathBuf>,
    /// Browser profile used by `refresh-cookies`.
    #[serde(default = "default_cookies_browser")]
    pub cookies_browser: String,
    /// Keyring account whose stored credentials are used when none are given per run.
    #[serde(default = "default_account")]
    pub account: String,
    /// Print a hint to refresh cookies after a failed cookie/anonymous download.
    #[serde(default = "default_true")]
    pub suggest_cookie_refresh: bool,
}

impl Default for YtdConfig {
    fn default() -> Self {
        Self {
            binary: None,
            binary_name: default_binary_name(),
            download_dir: None,
            cookies_file: None,
            cookies_browser: default_cookies_browser(),
            account: default_account(),
            suggest_cookie_refresh: true,
        }
    }
}

impl YtdConfig {
    pub fn resolve_download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(paths::default_download_dir()?),
        }
    }

    pub fn resolve_cookie_file(&self) -> Result<PathBuf> {
        match &self.cookies_file {
            Some(path) => Ok(path.clone()),
            None => paths::default_cookie_file(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YtdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = YtdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<YtdConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: YtdConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
