use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL API over authors and books, served over HTTP with GraphiQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for bookshelf.yml / bookshelf.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "BOOKSHELF_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,

        /// Do not serve GraphiQL on GET
        #[arg(long)]
        no_graphiql: bool,

        /// Start with an empty library instead of the seed set
        #[arg(long)]
        empty: bool,
    },

    /// Execute a GraphQL query against a fresh in-memory library
    Query {
        /// GraphQL document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Start with an empty library instead of the seed set
        #[arg(long)]
        empty: bool,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Start with an empty library instead of the seed set
        #[arg(long)]
        empty: bool,
    },

    /// Print the schema in GraphQL SDL
    Schema,
}
