//! Authentication precedence: explicit credentials, then cookie file, then none.

use std::fmt;
use std::path::{Path, PathBuf};

/// Message shown when a download runs without any authentication.
pub const ANONYMOUS_WARNING: &str =
    "Warning: No credentials provided and cookies file not found. Download may fail.";

/// Username and password for the hosting service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Builds credentials only when both parts are present and non-empty.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Self { username, password })
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Which authentication the downloader will be given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSource {
    Credentials(Credentials),
    CookieFile(PathBuf),
    Anonymous,
}

impl AuthSource {
    /// Downloader flags for this auth source, appended after the fixed flags.
    pub fn args(&self) -> Vec<String> {
        match self {
            AuthSource::Credentials(c) => vec![
                "--username".to_string(),
                c.username.clone(),
                "--password".to_string(),
                c.password.clone(),
            ],
            AuthSource::CookieFile(path) => vec![
                "--cookies".to_string(),
                path.to_string_lossy().into_owned(),
            ],
            AuthSource::Anonymous => Vec::new(),
        }
    }

    /// True when a failed download could plausibly be fixed by refreshing cookies.
    pub fn may_need_cookie_refresh(&self) -> bool {
        !matches!(self, AuthSource::Credentials(_))
    }

    /// Short human-readable label, safe to print (no secrets).
    pub fn describe(&self) -> String {
        match self {
            AuthSource::Credentials(c) => format!("credentials (user {})", c.username),
            AuthSource::CookieFile(path) => format!("cookie file {}", path.display()),
            AuthSource::Anonymous => "none".to_string(),
        }
    }
}

/// Picks the auth source.
///
/// Credentials win whenever present, regardless of the cookie file. The
/// cookie file is used only if it exists; otherwise the download is anonymous.
pub fn select_auth(
    credentials: Option<&Credentials>,
    cookie_file: &Path,
    cookie_exists: bool,
) -> AuthSource {
    if let Some(c) = credentials {
        return AuthSource::Credentials(c.clone());
    }
    if cookie_exists {
        return AuthSource::CookieFile(cookie_file.to_path_buf());
    }
    AuthSource::Anonymous
}
