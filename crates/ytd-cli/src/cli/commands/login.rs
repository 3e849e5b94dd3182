//! `ytd login` / `ytd logout` – manage credentials in the system keyring.

use crate::cli::GlobalArgs;
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead};
use ytd_core::auth::Credentials;
use ytd_core::login::{CredentialStore, KeyringStore};

pub fn run_login(global: &GlobalArgs, account: Option<&str>, password_stdin: bool) -> Result<i32> {
    let cfg = global.load_config()?;
    let account = account.unwrap_or(&cfg.account);

    let password = if password_stdin {
        Some(read_password_line(io::stdin().lock())?)
    } else {
        global.password.clone()
    };
    let Some(credentials) = Credentials::from_parts(global.username.clone(), password) else {
        bail!("login needs --username and a password (--password, YTDLP_PASSWORD or --password-stdin)");
    };

    KeyringStore::default().save(account, &credentials)?;
    println!(
        "Stored credentials for {} (account {})",
        credentials.username, account
    );
    Ok(0)
}

pub fn run_logout(global: &GlobalArgs, account: Option<&str>) -> Result<i32> {
    let cfg = global.load_config()?;
    let account = account.unwrap_or(&cfg.account);
    if KeyringStore::default().delete(account)? {
        println!("Removed stored credentials (account {account})");
    } else {
        println!("No stored credentials (account {account})");
    }
    Ok(0)
}

/// First line of `reader` without its line ending.
fn read_password_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
