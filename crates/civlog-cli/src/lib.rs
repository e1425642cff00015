mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
mod logging;
mod tui;
pub mod views;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
pub use logging::init_logger;
