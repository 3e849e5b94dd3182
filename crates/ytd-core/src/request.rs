//! The per-invocation request: target URL, credentials and cookie path.

use crate::auth::Credentials;
use crate::error::YtdError;
use std::path::PathBuf;

/// Characters stripped from both ends of the URL argument.
///
/// GUI front-ends historically wrapped the URL in quotes before handing it over.
fn is_wrapping_char(c: char) -> bool {
    c.is_whitespace() || c == '"' || c == '\''
}

/// Strips surrounding whitespace and quote characters from a raw URL argument.
///
/// Returns [`YtdError::Usage`] when the argument is absent or nothing is left.
pub fn parse_url(raw: Option<&str>) -> Result<String, YtdError> {
    let raw = raw.ok_or(YtdError::Usage)?;
    let url = raw.trim_matches(is_wrapping_char);
    if url.is_empty() {
        return Err(YtdError::Usage);
    }
    Ok(url.to_string())
}

/// Everything one download invocation needs besides static configuration.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub url: String,
    pub credentials: Option<Credentials>,
    pub cookie_file: PathBuf,
}

impl InvocationRequest {
    pub fn new(url: String, credentials: Option<Credentials>, cookie_file: PathBuf) -> Self {
        Self {
            url,
            credentials,
            cookie_file,
        }
    }
}
