//! The download invoker: resolve auth, build the command, run it, forward its status.

use crate::auth::{self, AuthSource, ANONYMOUS_WARNING};
use crate::command::CommandLine;
use crate::config::YtdConfig;
use crate::error::YtdError;
use crate::paths;
use crate::request::InvocationRequest;
use crate::tool;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// A command ready to run, plus the auth decision behind it.
#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub url: String,
    pub command: CommandLine,
    pub auth: AuthSource,
}

impl DownloadPlan {
    /// Warning to show before running, if the download is unauthenticated.
    pub fn warning(&self) -> Option<&'static str> {
        match self.auth {
            AuthSource::Anonymous => Some(ANONYMOUS_WARNING),
            _ => None,
        }
    }
}

/// Result of one finished download run.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub exit_code: i32,
    pub auth: AuthSource,
    suggest_cookie_refresh: bool,
}

impl DownloadOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// True if the failure hint should mention refreshing cookies.
    pub fn suggest_cookie_refresh(&self) -> bool {
        !self.success() && self.suggest_cookie_refresh && self.auth.may_need_cookie_refresh()
    }
}

/// Runs the external downloader for one request.
#[derive(Debug, Clone)]
pub struct Invoker {
    program: PathBuf,
    download_dir: PathBuf,
    suggest_cookie_refresh: bool,
}

impl Invoker {
    pub fn new(program: PathBuf, download_dir: PathBuf) -> Self {
        Self {
            program,
            download_dir,
            suggest_cookie_refresh: true,
        }
    }

    /// Resolves the downloader binary and download dir from config.
    /// `binary_override` (CLI/env) takes precedence over `cfg.binary`.
    pub fn from_config(cfg: &YtdConfig, binary_override: Option<&Path>) -> Result<Self> {
        let explicit = binary_override.or(cfg.binary.as_deref());
        let program = tool::resolve_binary(explicit, &cfg.binary_name)?;
        let download_dir = cfg.resolve_download_dir()?;
        Ok(Self::new(program, download_dir).with_cookie_hint(cfg.suggest_cookie_refresh))
    }

    pub fn with_cookie_hint(mut self, enabled: bool) -> Self {
        self.suggest_cookie_refresh = enabled;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Builds the command for `request`, probing the cookie file once.
    pub fn plan(&self, request: &InvocationRequest) -> DownloadPlan {
        let cookie_exists = request.cookie_file.is_file();
        let auth = auth::select_auth(
            request.credentials.as_ref(),
            &request.cookie_file,
            cookie_exists,
        );
        let template = paths::output_template(&self.download_dir);
        let command = CommandLine::download(&self.program, &request.url, &template, &auth);
        DownloadPlan {
            url: request.url.clone(),
            command,
            auth,
        }
    }

    /// Creates the download and cookie directories, then builds the plan.
    pub fn prepare(&self, request: &InvocationRequest) -> Result<DownloadPlan, YtdError> {
        paths::ensure_dir(&self.download_dir)?;
        if let Some(cookie_dir) = request.cookie_file.parent() {
            paths::ensure_private_dir(cookie_dir)?;
        }
        Ok(self.plan(request))
    }

    /// Runs a prepared plan to completion.
    pub fn execute_plan(&self, plan: DownloadPlan) -> Result<DownloadOutcome, YtdError> {
        tracing::info!("download url={} auth={}", plan.url, plan.auth.describe());
        if let Some(warning) = plan.warning() {
            tracing::warn!("{}", warning);
        }

        let exit_code = execute(&plan.command)?;
        if exit_code == 0 {
            tracing::info!("download finished url={}", plan.url);
        } else {
            tracing::warn!(
                "download failed url={} exit_code={}",
                plan.url,
                exit_code
            );
        }

        Ok(DownloadOutcome {
            exit_code,
            auth: plan.auth,
            suggest_cookie_refresh: self.suggest_cookie_refresh,
        })
    }

    /// [`Invoker::prepare`] followed by [`Invoker::execute_plan`].
    pub fn run(&self, request: &InvocationRequest) -> Result<DownloadOutcome, YtdError> {
        let plan = self.prepare(request)?;
        self.execute_plan(plan)
    }
}

/// Runs `command` with inherited stdio and blocks until it exits.
pub fn execute(command: &CommandLine) -> Result<i32, YtdError> {
    tracing::debug!("exec {}", command.display_redacted());
    let status = command
        .to_command()
        .status()
        .map_err(|source| YtdError::Spawn {
            program: command.program.clone(),
            source,
        })?;
    Ok(exit_code_of(status))
}

/// Process exit code for `status`; a signal-terminated child maps to `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::format::FORMAT_CHAIN;

    fn invoker(dir: &Path) -> Invoker {
        Invoker::new(PathBuf::from("/usr/bin/yt-dlp"), dir.join("Downloads"))
    }

    fn creds() -> Credentials {
        Credentials {
            username: "alice".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn credentials_win_over_existing_cookie_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cookie = tmp.path().join("cookies.txt");
        std::fs::write(&cookie, "# Netscape HTTP Cookie File\n").unwrap();
        let req = InvocationRequest::new("https://youtu.be/a".into(), Some(creds()), cookie);
        let plan = invoker(tmp.path()).plan(&req);
        assert!(plan.command.contains_flag("--username"));
        assert!(plan.command.contains_flag("--password"));
        assert!(!plan.command.contains_flag("--cookies"));
        assert!(plan.warning().is_none());
    }

    #[test]
    fn existing_cookie_file_used_without_credentials() {
        let tmp = tempfile::tempdir().unwrap();
        let cookie = tmp.path().join("cookies.txt");
        std::fs::write(&cookie, "").unwrap();
        let req = InvocationRequest::new("https://youtu.be/a".into(), None, cookie.clone());
        let plan = invoker(tmp.path()).plan(&req);
        assert_eq!(
            plan.command.value_of("--cookies"),
            Some(cookie.to_string_lossy().as_ref())
        );
        assert!(!plan.command.contains_flag("--username"));
        assert!(!plan.command.contains_flag("--password"));
    }

    #[test]
    fn anonymous_plan_warns() {
        let tmp = tempfile::tempdir().unwrap();
        let req = InvocationRequest::new(
            "https://youtu.be/a".into(),
            None,
            tmp.path().join("missing.txt"),
        );
        let plan = invoker(tmp.path()).plan(&req);
        assert!(!plan.command.contains_flag("--cookies"));
        assert!(!plan.command.contains_flag("--username"));
        assert_eq!(plan.warning(), Some(ANONYMOUS_WARNING));
    }

    #[test]
    fn cookie_path_that_is_a_directory_is_not_used() {
        let tmp = tempfile::tempdir().unwrap();
        let req = InvocationRequest::new("https://youtu.be/a".into(), None, tmp.path().into());
        let plan = invoker(tmp.path()).plan(&req);
        assert_eq!(plan.auth, AuthSource::Anonymous);
    }

    #[test]
    fn plan_output_and_format() {
        let tmp = tempfile::tempdir().unwrap();
        let req = InvocationRequest::new("https://youtu.be/a".into(), None, tmp.path().join("c"));
        let inv = invoker(tmp.path());
        let plan = inv.plan(&req);
        assert_eq!(plan.command.program, PathBuf::from("/usr/bin/yt-dlp"));
        assert_eq!(plan.command.args[0], "https://youtu.be/a");
        assert_eq!(plan.command.value_of("--format"), Some(FORMAT_CHAIN));
        let expected = paths::output_template(inv.download_dir());
        assert_eq!(plan.command.value_of("--output"), Some(expected.as_str()));
    }

    #[test]
    fn refresh_hint_only_for_cookie_or_anonymous_failures() {
        let outcome = |exit_code, auth| DownloadOutcome {
            exit_code,
            auth,
            suggest_cookie_refresh: true,
        };
        assert!(!outcome(0, AuthSource::Anonymous).suggest_cookie_refresh());
        assert!(outcome(1, AuthSource::Anonymous).suggest_cookie_refresh());
        assert!(outcome(2, AuthSource::CookieFile("/c".into())).suggest_cookie_refresh());
        assert!(!outcome(1, AuthSource::Credentials(creds())).suggest_cookie_refresh());
    }

    #[test]
    fn refresh_hint_can_be_disabled() {
        let outcome = DownloadOutcome {
            exit_code: 1,
            auth: AuthSource::Anonymous,
            suggest_cookie_refresh: false,
        };
        assert!(!outcome.suggest_cookie_refresh());
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_and_signals() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(exit_code_of(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_of(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), 137);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cmd = CommandLine {
            program: tmp.path().join("no-such-binary"),
            args: vec![],
        };
        assert!(matches!(execute(&cmd), Err(YtdError::Spawn { .. })));
    }
}
