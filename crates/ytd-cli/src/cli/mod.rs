//! CLI for ytd.

mod commands;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use ytd_core::auth::Credentials;
use ytd_core::config::{self, YtdConfig};
use ytd_core::login::{self, KeyringStore};

use commands::{
    run_completions, run_download, run_import_cookies, run_login, run_logout, run_man,
    run_refresh_cookies, run_reset_cookies, run_show_command,
};

/// Exit status for a missing URL.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Top-level CLI: `ytd <URL>` downloads; subcommands maintain cookies.
#[derive(Debug, Parser)]
#[command(name = "ytd", version)]
#[command(about = "ytd: download media with yt-dlp using a fixed format chain", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Media URL to download. Surrounding quotes are stripped.
    /// Use `ytd -- <URL>` for a bare video ID that starts with `-`.
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Account username; used only together with a password.
    #[arg(long, env = "YTDLP_USERNAME", hide_env_values = true, global = true)]
    pub username: Option<String>,

    /// Account password; used only together with a username.
    #[arg(long, env = "YTDLP_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Path (or PATH-searched name) of the yt-dlp executable.
    #[arg(long, env = "YTD_BINARY", value_name = "PATH", global = true)]
    pub binary: Option<PathBuf>,

    /// Config file to use instead of ~/.config/ytd/config.toml.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Mirror log output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.username.clone(), self.password.clone())
    }

    /// Per-run credentials, falling back to the keyring entry for `cfg.account`.
    pub fn resolved_credentials(&self, cfg: &YtdConfig) -> Option<Credentials> {
        login::resolve_credentials(self.credentials(), &KeyringStore::default(), &cfg.account)
    }

    pub fn load_config(&self) -> Result<YtdConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn binary_override(&self) -> Option<&Path> {
        self.binary.as_deref()
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the yt-dlp command that would run for a URL, without running it.
    ShowCommand {
        /// Media URL.
        url: String,
    },

    /// Export cookies from an installed browser into the cookie file.
    RefreshCookies {
        /// Browser profile to read (defaults to `cookies_browser` in config).
        #[arg(long)]
        browser: Option<String>,
    },

    /// Delete the cookie file.
    ResetCookies,

    /// Install a browser-exported Netscape cookie file as the cookie file.
    ImportCookies {
        /// Path to the exported cookies.txt.
        path: PathBuf,

        /// Leave the source file in place after importing.
        #[arg(long)]
        keep_source: bool,
    },

    /// Store credentials in the system keyring (from --username/--password or YTDLP_*).
    Login {
        /// Keyring account (defaults to `account` in config).
        #[arg(long)]
        account: Option<String>,

        /// Read the password from the first line of stdin.
        #[arg(long)]
        password_stdin: bool,
    },

    /// Remove stored credentials from the system keyring.
    Logout {
        /// Keyring account (defaults to `account` in config).
        #[arg(long)]
        account: Option<String>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl Cli {
    /// Runs the parsed command and returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let global = &self.global;
        match self.command {
            None => run_download(global, self.url.as_deref()),
            Some(CliCommand::ShowCommand { url }) => run_show_command(global, &url),
            Some(CliCommand::RefreshCookies { browser }) => {
                run_refresh_cookies(global, browser.as_deref())
            }
            Some(CliCommand::ResetCookies) => run_reset_cookies(global),
            Some(CliCommand::ImportCookies { path, keep_source }) => {
                run_import_cookies(global, &path, keep_source)
            }
            Some(CliCommand::Login {
                account,
                password_stdin,
            }) => run_login(global, account.as_deref(), password_stdin),
            Some(CliCommand::Logout { account }) => run_logout(global, account.as_deref()),
            Some(CliCommand::Completions { shell }) => {
                run_completions(shell, &mut Cli::command())
            }
            Some(CliCommand::Man) => run_man(Cli::command()),
        }
    }
}

#[cfg(test)]
mod tests;
