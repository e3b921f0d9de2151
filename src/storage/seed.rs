use crate::model::{Author, Book};

use super::Library;

const AUTHORS: &[(i32, &str)] = &[
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
];

const BOOKS: &[(i32, &str, i32)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
];

impl Library {
    /// Create a library holding the fixed seed set.
    pub fn seeded() -> Self {
        let authors = AUTHORS
            .iter()
            .map(|&(id, name)| Author::new(id, name))
            .collect();
        let books = BOOKS
            .iter()
            .map(|&(id, name, author_id)| Book::new(id, name, author_id))
            .collect();
        Self::with_records(authors, books)
    }
}
