//! `ytd <url>` – run yt-dlp once and forward its exit code.

use crate::cli::{Cli, GlobalArgs, USAGE_EXIT_CODE};
use anyhow::Result;
use clap::CommandFactory;
use ytd_core::error::YtdError;
use ytd_core::invoke::Invoker;
use ytd_core::request::{self, InvocationRequest};

pub fn run_download(global: &GlobalArgs, raw_url: Option<&str>) -> Result<i32> {
    let url = match request::parse_url(raw_url) {
        Ok(url) => url,
        Err(YtdError::Usage) => {
            eprintln!("{}", Cli::command().render_usage());
            tracing::info!("no URL given; nothing to do");
            return Ok(USAGE_EXIT_CODE);
        }
        Err(e) => return Err(e.into()),
    };

    let cfg = global.load_config()?;
    let invoker = Invoker::from_config(&cfg, global.binary_override())?;
    let req = InvocationRequest::new(url, global.resolved_credentials(&cfg), cfg.resolve_cookie_file()?);

    let plan = invoker.prepare(&req)?;
    if let Some(warning) = plan.warning() {
        eprintln!("{warning}");
    }

    let outcome = invoker.execute_plan(plan)?;
    if !outcome.success() {
        eprintln!("Download failed with exit code {}", outcome.exit_code);
        if outcome.suggest_cookie_refresh() {
            eprintln!("If you are using cookies, consider refreshing them with `ytd refresh-cookies`.");
        }
    }
    Ok(outcome.exit_code)
}
