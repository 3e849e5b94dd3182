//! Export cookies from a browser profile through the downloader.

use super::store::ensure_cookie_dir;
use crate::command::CommandLine;
use crate::invoke;
use std::fmt;
use std::path::Path;

/// How a refresh attempt ended. Never fatal to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    /// The downloader ran and exited non-zero.
    Failed { exit_code: i32 },
    /// The downloader could not be started or the cookie dir could not be created.
    Unavailable(String),
}

impl fmt::Display for RefreshOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshOutcome::Refreshed => write!(f, "Cookies refreshed successfully."),
            RefreshOutcome::Failed { exit_code } => {
                write!(f, "Failed to refresh cookies: exit code {}", exit_code)
            }
            RefreshOutcome::Unavailable(reason) => {
                write!(f, "Failed to refresh cookies: {}", reason)
            }
        }
    }
}

/// Runs `<program> --cookies-from-browser <browser> --cookies <cookie_file>`.
pub fn refresh_cookies(program: &Path, browser: &str, cookie_file: &Path) -> RefreshOutcome {
    if let Err(e) = ensure_cookie_dir(cookie_file) {
        tracing::warn!("cookie refresh: {:#}", e);
        return RefreshOutcome::Unavailable(format!("{:#}", e));
    }

    let command = CommandLine::cookie_refresh(program, browser, cookie_file);
    tracing::info!(
        "refreshing cookies from {} into {}",
        browser,
        cookie_file.display()
    );
    let outcome = match invoke::execute(&command) {
        Ok(0) => RefreshOutcome::Refreshed,
        Ok(exit_code) => RefreshOutcome::Failed { exit_code },
        Err(e) => RefreshOutcome::Unavailable(e.to_string()),
    };
    if outcome != RefreshOutcome::Refreshed {
        tracing::warn!("{}", outcome);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_unavailable_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = refresh_cookies(
            &tmp.path().join("no-such-binary"),
            "chrome",
            &tmp.path().join("yt-cookies").join("cookies.txt"),
        );
        assert!(matches!(outcome, RefreshOutcome::Unavailable(_)));
        assert!(tmp.path().join("yt-cookies").is_dir());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            RefreshOutcome::Refreshed.to_string(),
            "Cookies refreshed successfully."
        );
        assert_eq!(
            RefreshOutcome::Failed { exit_code: 2 }.to_string(),
            "Failed to refresh cookies: exit code 2"
        );
    }
}
