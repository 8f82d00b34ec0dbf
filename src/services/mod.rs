//! Business logic services

pub mod books;

use std::sync::Arc;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: Arc<dyn books::BookService>,
}

impl Services {
    /// Create the default service set, backed by in-memory storage
    pub fn new() -> Self {
        Self {
            books: Arc::new(books::InMemoryBookService::new()),
        }
    }

    /// Create the service set around a specific book service implementation.
    ///
    /// Lets tests substitute a double for the in-memory store.
    pub fn with_book_service(books: Arc<dyn books::BookService>) -> Self {
        Self { books }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
