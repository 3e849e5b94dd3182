//! Downloader command lines, built deterministically from a request.

use crate::auth::AuthSource;
use crate::format::{FORMAT_CHAIN, PROGRESS_TEMPLATE, REMUX_CONTAINER};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program plus ordered argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandLine {
    /// `<url> --output .. --format .. --remux-video mp4 --abort-on-error
    /// --progress-template ..` followed by the auth flags.
    pub fn download(program: &Path, url: &str, output_template: &str, auth: &AuthSource) -> Self {
        let mut args: Vec<String> = vec![
            url.to_string(),
            "--output".into(),
            output_template.to_string(),
            "--format".into(),
            FORMAT_CHAIN.into(),
            "--remux-video".into(),
            REMUX_CONTAINER.into(),
            "--abort-on-error".into(),
            "--progress-template".into(),
            PROGRESS_TEMPLATE.into(),
        ];
        args.extend(auth.args());
        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    /// Export cookies from an installed browser profile into `cookie_file`.
    pub fn cookie_refresh(program: &Path, browser: &str, cookie_file: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
            args: vec![
                "--cookies-from-browser".into(),
                browser.to_string(),
                "--cookies".into(),
                cookie_file.to_string_lossy().into_owned(),
            ],
        }
    }

    pub fn contains_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Token following `flag`, if both are present.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Shell-quoted rendering with the `--password` value masked.
    pub fn display_redacted(&self) -> String {
        let mut out = shell_quote(&self.program.to_string_lossy());
        let mut mask_next = false;
        for arg in &self.args {
            out.push(' ');
            if mask_next {
                out.push_str("'****'");
                mask_next = false;
                continue;
            }
            out.push_str(&shell_quote(arg));
            mask_next = arg == "--password";
        }
        out
    }
}

fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
