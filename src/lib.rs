//! # Bookshelf - a small GraphQL API over authors and books
//!
//! Authors and books live in an in-memory [`storage::Library`]; a GraphQL
//! schema built with async-graphql exposes them over HTTP through axum,
//! with GraphiQL served on the same route.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://localhost:5000/graphql
//! bookshelf serve
//!
//! # Query without a server
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`logging`]: tracing subscriber setup
//! - [`graphql`]: GraphQL schema, resolvers and HTTP gateway
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: In-memory library

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `bookshelf.yml` / `bookshelf.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP gateway.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// In-memory storage.
pub mod storage;

/// Logging setup.
///
/// tracing subscriber writing to stderr, optionally to a rolling JSON file.
pub mod logging;
