use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
    pub empty: bool,
}

pub fn handle_serve(ctx: CommandContext, options: ServeOptions) -> Result<()> {
    let library = ctx.library(options.empty);
    let mut settings = ctx.config.server;
    if let Some(host) = options.host {
        settings.host = host;
    }
    if let Some(port) = options.port {
        settings.port = port;
    }
    if options.no_graphiql {
        settings.graphiql = false;
    }

    tracing::info!(
        authors = library.author_count()?,
        books = library.book_count()?,
        "Library ready"
    );

    let display_host = match settings.host.as_str() {
        "0.0.0.0" | "::" => "localhost",
        host => host,
    };
    let url = format!("http://{}:{}{}", display_host, settings.port, settings.path);
    println!("{} {}", "Server running at".green(), url.cyan());
    if settings.graphiql {
        println!("{}        {}", "GraphiQL:".green(), url.cyan());
    }

    let schema = build_schema(library);
    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
