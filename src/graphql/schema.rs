use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::Library;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

/// The schema in GraphQL SDL form.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of Books
    async fn books(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        Ok(nullable_list(library(ctx)?.books()?))
    }

    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Book>> {
        Ok(library(ctx)?.book(id)?.map(Into::into))
    }

    /// List of Authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        Ok(nullable_list(library(ctx)?.authors()?))
    }

    /// A single Author
    async fn author(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Author>> {
        Ok(library(ctx)?.author(id)?.map(Into::into))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a new Book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        Ok(Some(library(ctx)?.add_book(name, author_id)?.into()))
    }

    /// Add a new Author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        Ok(Some(library(ctx)?.add_author(name)?.into()))
    }
}
