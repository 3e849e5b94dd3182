//! Tests for cookie subcommands, completions and man.

use super::parse_command;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_refresh_cookies() {
    match parse_command(&["ytd", "refresh-cookies"]) {
        CliCommand::RefreshCookies { browser } => assert!(browser.is_none()),
        _ => panic!("expected RefreshCookies"),
    }
}

#[test]
fn cli_parse_refresh_cookies_browser() {
    match parse_command(&["ytd", "refresh-cookies", "--browser", "firefox"]) {
        CliCommand::RefreshCookies { browser } => assert_eq!(browser.as_deref(), Some("firefox")),
        _ => panic!("expected RefreshCookies with --browser"),
    }
}

#[test]
fn cli_parse_reset_cookies() {
    match parse_command(&["ytd", "reset-cookies"]) {
        CliCommand::ResetCookies => {}
        _ => panic!("expected ResetCookies"),
    }
}

#[test]
fn cli_parse_import_cookies() {
    match parse_command(&["ytd", "import-cookies", "/tmp/cookies.txt"]) {
        CliCommand::ImportCookies { path, keep_source } => {
            assert_eq!(path, std::path::PathBuf::from("/tmp/cookies.txt"));
            assert!(!keep_source);
        }
        _ => panic!("expected ImportCookies"),
    }
}

#[test]
fn cli_parse_import_cookies_keep_source() {
    match parse_command(&["ytd", "import-cookies", "c.txt", "--keep-source"]) {
        CliCommand::ImportCookies { keep_source, .. } => assert!(keep_source),
        _ => panic!("expected ImportCookies with --keep-source"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse_command(&["ytd", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse_command(&["ytd", "man"]), CliCommand::Man));
}

#[test]
fn import_cookies_with_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("jar").join("cookies.txt");
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        format!("cookies_file = {:?}\n", dest.to_string_lossy()),
    )
    .unwrap();
    let src = dir.path().join("export.txt");
    std::fs::write(
        &src,
        "# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\tTRUE\t0\tSID\tabc\n",
    )
    .unwrap();

    let cli = super::parse(&[
        "ytd",
        "import-cookies",
        src.to_str().unwrap(),
        "--config",
        cfg_path.to_str().unwrap(),
    ]);
    assert_eq!(cli.run().unwrap(), 0);
    assert!(dest.is_file());
    assert!(!src.exists());
}

#[test]
fn global_flag_before_subcommand() {
    let cli = super::parse(&["ytd", "-v", "reset-cookies"]);
    assert!(cli.global.verbose);
    assert!(matches!(cli.command, Some(CliCommand::ResetCookies)));
}

#[test]
fn refresh_cookies_with_broken_config_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "suggest_cookie_refresh = \"maybe\"").unwrap();

    let cli = super::parse(&[
        "ytd",
        "refresh-cookies",
        "--config",
        cfg_path.to_str().unwrap(),
    ]);
    assert_eq!(cli.run().unwrap(), 0);
}

#[test]
fn cli_parse_login() {
    match parse_command(&["ytd", "login", "--username", "alice", "--password-stdin"]) {
        CliCommand::Login {
            account,
            password_stdin,
        } => {
            assert!(account.is_none());
            assert!(password_stdin);
        }
        _ => panic!("expected Login"),
    }
}

#[test]
fn cli_parse_logout_account() {
    match parse_command(&["ytd", "logout", "--account", "temp_user"]) {
        CliCommand::Logout { account } => assert_eq!(account.as_deref(), Some("temp_user")),
        _ => panic!("expected Logout"),
    }
}
