//! Cookie file maintenance: browser refresh, reset, and import.
//!
//! The download path only reads the cookie file (via the downloader); these
//! helpers are run manually when the session goes stale.

mod refresh;
mod store;

pub use refresh::{refresh_cookies, RefreshOutcome};
pub use store::{
    ensure_cookie_dir, import_cookie_file, looks_like_netscape, reset_cookies, temp_path,
    ImportSummary,
};
