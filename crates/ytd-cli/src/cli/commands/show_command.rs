//! `ytd show-command <url>` – print the command a download would run.

use crate::cli::GlobalArgs;
use anyhow::Result;
use ytd_core::invoke::Invoker;
use ytd_core::request::{self, InvocationRequest};

pub fn run_show_command(global: &GlobalArgs, raw_url: &str) -> Result<i32> {
    let url = request::parse_url(Some(raw_url))?;
    let cfg = global.load_config()?;
    let invoker = Invoker::from_config(&cfg, global.binary_override())?;
    let req = InvocationRequest::new(url, global.resolved_credentials(&cfg), cfg.resolve_cookie_file()?);

    let plan = invoker.plan(&req);
    println!("# auth: {}", plan.auth.describe());
    if let Some(warning) = plan.warning() {
        println!("# {warning}");
    }
    println!("{}", plan.command.display_redacted());
    Ok(0)
}
