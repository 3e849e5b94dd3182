//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use crate::paths::APP_PREFIX;
use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,ytd=debug,ytd_core=debug";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Path of the log file: `~/.local/state/ytd/ytd.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.get_state_home().join(APP_PREFIX).join("ytd.log"))
}

/// Initialize structured logging to `~/.local/state/ytd/ytd.log`.
/// With `verbose`, events are mirrored to stderr as well.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(verbose: bool) -> Result<()> {
    let log_file_path = log_file_path()?;
    if let Some(log_dir) = log_file_path.parent() {
        fs::create_dir_all(log_dir)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!("ytd logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
/// Without `verbose` only warnings and errors are shown.
pub fn init_logging_stderr(verbose: bool) {
    let default = if verbose { DEFAULT_FILTER } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
