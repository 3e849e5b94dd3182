//! Shell completions and man page.

use anyhow::Result;
use clap_complete::Shell;
use std::io;

pub fn run_completions(shell: Shell, cmd: &mut clap::Command) -> Result<i32> {
    clap_complete::generate(shell, cmd, "ytd", &mut io::stdout());
    Ok(0)
}

pub fn run_man(cmd: clap::Command) -> Result<i32> {
    clap_mangen::Man::new(cmd).render(&mut io::stdout())?;
    Ok(0)
}
