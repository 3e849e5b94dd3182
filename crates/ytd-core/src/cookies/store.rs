//! Cookie file on disk: private directory, atomic import, reset.

use crate::paths;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temp path used while importing: `cookies.txt` → `cookies.txt.part`.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Creates the cookie file's parent directory (mode 0700 on unix) if absent.
pub fn ensure_cookie_dir(cookie_file: &Path) -> Result<()> {
    match cookie_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(paths::ensure_private_dir(dir)?),
        _ => Ok(()),
    }
}

/// Netscape cookie jar check: the standard header, or at least one
/// tab-separated record with seven fields.
pub fn looks_like_netscape(contents: &str) -> bool {
    contents.lines().any(|line| {
        let line = line.trim_end_matches('\r');
        if line.starts_with("# Netscape HTTP Cookie File") || line.starts_with("# HTTP Cookie File")
        {
            return true;
        }
        if line.is_empty() || (line.starts_with('#') && !line.starts_with("#HttpOnly_")) {
            return false;
        }
        line.split('\t').count() == 7
    })
}

/// Deletes the cookie file. Returns whether a file was removed.
pub fn reset_cookies(cookie_file: &Path) -> Result<bool> {
    if !cookie_file.exists() {
        tracing::info!("no cookie file to delete at {}", cookie_file.display());
        return Ok(false);
    }
    fs::remove_file(cookie_file)
        .with_context(|| format!("delete {}", cookie_file.display()))?;
    tracing::info!("deleted cookie file {}", cookie_file.display());
    Ok(true)
}

/// What [`import_cookie_file`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub destination: PathBuf,
    pub bytes: u64,
    pub replaced: bool,
    pub source_removed: bool,
}

/// Copies a browser-exported cookie file into place.
///
/// Any stale `<dest>.part` (file or symlink) is unlinked, then the temp file
/// is created exclusively with mode 0600 and renamed over `dest`. The bytes
/// are copied unchanged. The source is removed afterwards unless
/// `keep_source` is set.
pub fn import_cookie_file(source: &Path, dest: &Path, keep_source: bool) -> Result<ImportSummary> {
    let contents = fs::read(source).with_context(|| format!("read {}", source.display()))?;
    if !looks_like_netscape(&String::from_utf8_lossy(&contents)) {
        bail!(
            "{} does not look like a Netscape cookie file",
            source.display()
        );
    }

    ensure_cookie_dir(dest)?;
    let tmp = temp_path(dest);
    write_private(&tmp, &contents)?;
    let replaced = dest.exists();
    fs::rename(&tmp, dest)
        .with_context(|| format!("rename {} -> {}", tmp.display(), dest.display()))?;

    let source_removed = if keep_source || same_file(source, dest) {
        false
    } else {
        fs::remove_file(source).with_context(|| format!("delete {}", source.display()))?;
        true
    };

    tracing::info!(
        "imported cookies {} -> {} ({} bytes)",
        source.display(),
        dest.display(),
        contents.len()
    );
    Ok(ImportSummary {
        destination: dest.to_path_buf(),
        bytes: contents.len() as u64,
        replaced,
        source_removed,
    })
}

/// Writes `data` to a freshly created `path` that is never group/world readable.
fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    if fs::symlink_metadata(path).is_ok() {
        fs::remove_file(path).with_context(|| format!("remove stale {}", path.display()))?;
    }
    let mut opts = fs::OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts
        .open(path)
        .with_context(|| format!("create {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("write {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
