//! CLI command handlers. Each command is in its own file.

mod completions;
mod cookies;
mod download;
mod login;
mod show_command;

pub use completions::{run_completions, run_man};
pub use cookies::{run_import_cookies, run_refresh_cookies, run_reset_cookies};
pub use download::run_download;
pub use login::{run_login, run_logout};
pub use show_command::run_show_command;
