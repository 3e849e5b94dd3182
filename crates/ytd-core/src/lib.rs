pub mod config;
pub mod logging;

pub mod auth;
pub mod command;
pub mod cookies;
pub mod error;
pub mod format;
pub mod invoke;
pub mod login;
pub mod paths;
pub mod request;
pub mod tool;
