use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::storage::Library;

pub(crate) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Library>> {
    ctx.data::<Arc<Library>>()
}

/// Converts store records into a `[T]` list: both the list and its items are nullable.
pub(crate) fn nullable_list<M, T: From<M>>(records: Vec<M>) -> Option<Vec<Option<T>>> {
    Some(records.into_iter().map(|r| Some(r.into())).collect())
}

/// This represents the author of the book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let books = library(ctx)?.books_by_author(self.id)?;
        Ok(nullable_list(books))
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// Author of the book
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?;
        Ok(library.author(self.author_id)?.map(Into::into))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}
