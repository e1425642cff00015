use env_logger::{Builder, Env};

use crate::args::LogLevel;

/// Log to stderr at `level` unless `RUST_LOG` says otherwise.
///
/// Example: `RUST_LOG=civlog_providers=debug civlog show voos.csv`
pub fn init_logger(level: LogLevel) {
    Builder::from_env(Env::default().default_filter_or(level.to_string()))
        .format_timestamp_millis()
        .init();
}
