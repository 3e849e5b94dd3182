//! Error types returned at the library seams.

use std::path::PathBuf;
use thiserror::Error;

/// Errors the invoker reports to its caller.
///
/// A non-zero exit from the downloader is not an error here: it is carried
/// as an exit code in [`crate::invoke::DownloadOutcome`] and forwarded as-is.
#[derive(Debug, Error)]
pub enum YtdError {
    /// The URL argument is missing or empty after stripping quotes.
    #[error("missing URL argument")]
    Usage,

    /// The downloader executable was not found on PATH.
    #[error("downloader `{name}` not found on PATH: {reason}")]
    ToolNotFound { name: String, reason: String },

    /// An explicit binary override points at a path that does not exist.
    #[error("downloader binary {0} does not exist")]
    BinaryMissing(PathBuf),

    /// The downloader could not be started.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not determine the user's home directory.
    #[error("cannot determine home directory")]
    NoHomeDir,

    /// Failed to create a directory the invoker needs.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The system credential store refused a lookup or update.
    #[error("credential store: {0}")]
    CredentialStore(#[from] keyring::Error),
}
