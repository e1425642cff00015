mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "civlog")]
#[command(about = "Normalize SACI flight-log exports and close logbook pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $CIVLOG_CONFIG, then the user config directory)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Output format (default: from config, else plain)")]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
