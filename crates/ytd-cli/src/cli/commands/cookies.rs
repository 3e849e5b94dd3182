//! Cookie maintenance commands: refresh, reset, import.

use crate::cli::GlobalArgs;
use anyhow::Result;
use std::path::Path;
use ytd_core::cookies;
use ytd_core::tool;

/// `ytd refresh-cookies` – every failure, config included, is reported and
/// the command still exits 0.
pub fn run_refresh_cookies(global: &GlobalArgs, browser: Option<&str>) -> Result<i32> {
    println!("Refreshing cookies...");
    let (cfg, cookie_file) = match global
        .load_config()
        .and_then(|cfg| cfg.resolve_cookie_file().map(|path| (cfg, path)))
    {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!("cookie refresh skipped: {:#}", e);
            println!("Failed to refresh cookies: {e:#}");
            return Ok(0);
        }
    };
    let browser = browser.unwrap_or(&cfg.cookies_browser);

    let explicit = global.binary_override().or(cfg.binary.as_deref());
    match tool::resolve_binary(explicit, &cfg.binary_name) {
        Ok(program) => {
            let outcome = cookies::refresh_cookies(&program, browser, &cookie_file);
            println!("{outcome}");
        }
        Err(e) => {
            tracing::warn!("cookie refresh skipped: {}", e);
            println!("Failed to refresh cookies: {e}");
        }
    }
    Ok(0)
}

/// `ytd reset-cookies`
pub fn run_reset_cookies(global: &GlobalArgs) -> Result<i32> {
    let cfg = global.load_config()?;
    let cookie_file = cfg.resolve_cookie_file()?;
    if cookies::reset_cookies(&cookie_file)? {
        println!("Deleted cookie file {}", cookie_file.display());
    } else {
        println!("No cookie file at {}", cookie_file.display());
    }
    Ok(0)
}

/// `ytd import-cookies <path>`
pub fn run_import_cookies(global: &GlobalArgs, source: &Path, keep_source: bool) -> Result<i32> {
    let cfg = global.load_config()?;
    let cookie_file = cfg.resolve_cookie_file()?;
    let summary = cookies::import_cookie_file(source, &cookie_file, keep_source)?;
    println!(
        "Imported {} bytes of cookies into {}{}",
        summary.bytes,
        summary.destination.display(),
        if summary.replaced { " (replaced existing)" } else { "" }
    );
    if summary.source_removed {
        println!("  (removed {})", source.display());
    }
    Ok(0)
}
