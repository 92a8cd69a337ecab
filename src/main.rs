use anyhow::{Context, Result};
use clap::Parser;

use tord::cli::{Cli, CommandContext, Commands, handlers};
use tord::config::TordConfig;
use tord::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone());

    let config = TordConfig::load(cli.config.as_deref())
        .context("Failed to load tord configuration")?;
    let ctx = CommandContext::new(config, cli.empty);

    match cli.command {
        Commands::Serve { port, host } => handlers::handle_serve(ctx, port, host),
        Commands::Query { query, variables } => handlers::handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(ctx, mutation, variables),
        Commands::Sdl => handlers::handle_sdl(ctx),
    }
}
