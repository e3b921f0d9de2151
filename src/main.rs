use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{self, CommandContext, ServeOptions};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    bookshelf::logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let config = BookshelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookshelf configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
            empty,
        } => handlers::handle_serve(
            ctx,
            ServeOptions {
                host,
                port,
                no_graphiql,
                empty,
            },
        ),
        Commands::Query {
            query,
            variables,
            empty,
        } => handlers::handle_query(&ctx, query, variables, empty),
        Commands::Mutate {
            mutation,
            variables,
            empty,
        } => handlers::handle_mutate(&ctx, mutation, variables, empty),
        Commands::Schema => handlers::handle_schema(),
    }
}
