//! Data models for the bookshelf.
//!
//! - [`Author`]: a writer, identified by an integer id
//! - [`Book`]: a book pointing at its author through `author_id`
//!
//! The relationship is not stored on the author side; it is computed by
//! scanning the books (see [`crate::storage::Library::books_by_author`]).

mod author;
mod book;

pub use author::Author;
pub use book::Book;
