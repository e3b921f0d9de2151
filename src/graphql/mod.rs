//! GraphQL schema, resolvers and HTTP gateway for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! bookshelf serve --port 5000
//!
//! # Execute a query from CLI
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addAuthor(name: "Robin Hobb") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `book`, `authors`, `author`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema, sdl};
pub use server::{router, run_server};
pub use types::{Author, Book};
