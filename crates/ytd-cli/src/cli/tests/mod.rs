//! CLI parse tests, split by command.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse_command(args: &[&str]) -> CliCommand {
    parse(args).command.expect("expected a subcommand")
}

mod cookies;
