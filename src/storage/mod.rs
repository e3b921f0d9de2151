//! In-memory storage for authors and books.
//!
//! Nothing is persisted: a [`Library`] starts either empty or from the
//! fixed seed set ([`Library::seeded`]) and only grows by appending.
//!
//! ## Components
//!
//! - [`Library`]: the store, shared between resolvers as `Arc<Library>`
//! - `seed`: the deterministic records loaded at startup

mod library;
mod seed;

pub use library::Library;
