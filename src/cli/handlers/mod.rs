mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeOptions, handle_serve};

use crate::config::BookshelfConfig;
use crate::storage::Library;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self { config }
    }

    /// A fresh library, seeded unless `empty` is set or seeding is disabled in config.
    pub fn library(&self, empty: bool) -> Arc<Library> {
        if empty || !self.config.data.seed {
            Arc::new(Library::new())
        } else {
            Arc::new(Library::seeded())
        }
    }
}
