use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let ctx = ExecutionContext::new(config, cli.format);

    match cli.command {
        Commands::Show { file } => handlers::show::handle(&ctx, &file),

        Commands::Totals {
            file,
            pages,
            start_here,
        } => handlers::totals::handle(&ctx, &file, &pages, start_here),

        Commands::Export { file, output } => {
            handlers::export::handle(&ctx, &file, output.as_deref())
        }

        Commands::Close { file } => handlers::close::handle(&ctx, &file),
    }
}
