use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book},
};

#[derive(Debug, Default)]
struct Shelves {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// In-memory store for authors and books.
///
/// Both sequences are append-only and live behind a single lock, so id
/// assignment and the append happen atomically for every write.
#[derive(Debug, Default)]
pub struct Library {
    shelves: RwLock<Shelves>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library pre-populated with the given records, kept in order.
    pub fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            shelves: RwLock::new(Shelves { authors, books }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Shelves>> {
        self.shelves
            .read()
            .map_err(|_| BookshelfError::Storage("library lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Shelves>> {
        self.shelves
            .write()
            .map_err(|_| BookshelfError::Storage("library lock poisoned".to_string()))
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    /// All books in insertion order.
    pub fn books(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    /// First author with the given id.
    pub fn author(&self, id: i32) -> Result<Option<Author>> {
        Ok(self.read()?.authors.iter().find(|a| a.id == id).cloned())
    }

    /// First book with the given id.
    pub fn book(&self, id: i32) -> Result<Option<Book>> {
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    /// Books whose `author_id` matches, in store order.
    pub fn books_by_author(&self, author_id: i32) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    /// The author a book points at, if one exists.
    pub fn author_of(&self, book: &Book) -> Result<Option<Author>> {
        Ok(self
            .read()?
            .authors
            .iter()
            .find(|a| book.is_written_by(a))
            .cloned())
    }

    pub fn author_count(&self) -> Result<usize> {
        Ok(self.read()?.authors.len())
    }

    pub fn book_count(&self) -> Result<usize> {
        Ok(self.read()?.books.len())
    }

    /// Append a new author with id `count + 1`.
    pub fn add_author(&self, name: impl Into<String>) -> Result<Author> {
        let mut shelves = self.write()?;
        let id = next_id(shelves.authors.len())?;
        let author = Author::new(id, name);
        tracing::info!(id = author.id, name = %author.name, "Adding author");
        shelves.authors.push(author.clone());
        Ok(author)
    }

    /// Append a new book with id `count + 1`. `author_id` is stored as given.
    pub fn add_book(&self, name: impl Into<String>, author_id: i32) -> Result<Book> {
        let mut shelves = self.write()?;
        let id = next_id(shelves.books.len())?;
        let book = Book::new(id, name, author_id);
        if !shelves.authors.iter().any(|a| book.is_written_by(a)) {
            tracing::debug!(id = book.id, author_id, "Book references unknown author");
        }
        tracing::info!(id = book.id, name = %book.name, author_id, "Adding book");
        shelves.books.push(book.clone());
        Ok(book)
    }
}

fn next_id(len: usize) -> Result<i32> {
    len.checked_add(1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| BookshelfError::Storage("id space exhausted".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn two_book_library() -> Library {
        Library::with_records(
            vec![Author::new(1, "Ursula K. Le Guin"), Author::new(2, "Iain M. Banks")],
            vec![
                Book::new(1, "A Wizard of Earthsea", 1),
                Book::new(2, "Consider Phlebas", 2),
                Book::new(3, "The Left Hand of Darkness", 1),
            ],
        )
    }

    #[test]
    fn test_empty_library_returns_empty_sequences() {
        let library = Library::new();
        assert!(library.authors().unwrap().is_empty());
        assert!(library.books().unwrap().is_empty());
        assert_eq!(library.author(1).unwrap(), None);
        assert_eq!(library.book(1).unwrap(), None);
    }

    #[test]
    fn test_lookup_by_id_returns_exact_record() {
        let library = two_book_library();
        for author in library.authors().unwrap() {
            assert_eq!(library.author(author.id).unwrap(), Some(author));
        }
        for book in library.books().unwrap() {
            assert_eq!(library.book(book.id).unwrap(), Some(book));
        }
    }

    #[test]
    fn test_lookup_returns_first_match_on_duplicate_ids() {
        let library = Library::with_records(
            vec![Author::new(1, "First"), Author::new(1, "Second")],
            vec![],
        );
        assert_eq!(library.author(1).unwrap().unwrap().name, "First");
    }

    #[test]
    fn test_books_by_author_keeps_store_order() {
        let library = two_book_library();
        let names: Vec<_> = library
            .books_by_author(1)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["A Wizard of Earthsea", "The Left Hand of Darkness"]);
        assert!(library.books_by_author(99).unwrap().is_empty());
    }

    #[test]
    fn test_author_of_book() {
        let library = two_book_library();
        let book = library.book(2).unwrap().unwrap();
        assert_eq!(
            library.author_of(&book).unwrap(),
            Some(Author::new(2, "Iain M. Banks"))
        );

        let orphan = Book::new(10, "Orphan", 42);
        assert_eq!(library.author_of(&orphan).unwrap(), None);
    }

    #[test]
    fn test_add_author_assigns_next_id() {
        let library = two_book_library();
        let before = library.author_count().unwrap();

        let author = library.add_author("Octavia E. Butler").unwrap();

        assert_eq!(author.id as usize, before + 1);
        assert_eq!(library.authors().unwrap().last(), Some(&author));
    }

    #[test]
    fn test_add_book_without_existing_author() {
        let library = two_book_library();
        let book = library.add_book("Kindred", 77).unwrap();

        assert_eq!(book, Book::new(4, "Kindred", 77));
        assert_eq!(library.book_count().unwrap(), 4);
        assert_eq!(library.author_of(&book).unwrap(), None);
    }

    #[test]
    fn test_reads_do_not_mutate() {
        let library = two_book_library();
        let first = (library.authors().unwrap(), library.books().unwrap());
        let _ = library.author(1).unwrap();
        let _ = library.book(3).unwrap();
        let _ = library.books_by_author(1).unwrap();
        let second = (library.authors().unwrap(), library.books().unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_adds_get_unique_ids() {
        let library = Arc::new(Library::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let library = Arc::clone(&library);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        library.add_book(format!("book {t}-{i}"), t).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<_> = library.books().unwrap().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
    }
}
