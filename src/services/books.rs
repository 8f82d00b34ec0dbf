//! Book catalog service
//!
//! Holds the capability interface the HTTP layer depends on, plus the
//! in-memory implementation backing it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{error::AppResult, models::Book};

/// Capability interface for book storage.
///
/// Handlers only depend on this trait, so the in-memory store can be swapped
/// for another backing (or a test double) without touching the HTTP layer.
/// Found/not-found outcomes are reported as booleans, never as errors; the
/// `AppResult` wrapper exists for implementations with real I/O behind them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookService: Send + Sync {
    /// Insert `book` keyed by its id. Inserting an id that is already
    /// present replaces the stored entry (last write wins).
    async fn add_book(&self, book: Book) -> AppResult<()>;

    /// Snapshot of all stored books, in no particular order.
    async fn get_books(&self) -> AppResult<Vec<Book>>;

    /// Overwrite title, author and published date of the book under `id`.
    /// The stored id is kept; the id carried by `book` is ignored.
    /// Returns false and leaves the store untouched when `id` is unknown.
    async fn update_book(&self, id: Uuid, book: Book) -> AppResult<bool>;

    /// Remove the book under `id`. Returns false when `id` is unknown.
    async fn delete_book(&self, id: Uuid) -> AppResult<bool>;
}

/// In-memory implementation of [`BookService`].
///
/// Every instance owns an independent store, guarded by an async `RwLock`
/// since handlers share one instance across the multi-threaded runtime.
#[derive(Clone, Default)]
pub struct InMemoryBookService {
    books: Arc<RwLock<HashMap<Uuid, Book>>>,
}

impl InMemoryBookService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookService for InMemoryBookService {
    async fn add_book(&self, book: Book) -> AppResult<()> {
        self.books.write().await.insert(book.id, book);
        Ok(())
    }

    async fn get_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn update_book(&self, id: Uuid, book: Book) -> AppResult<bool> {
        match self.books.write().await.get_mut(&id) {
            Some(stored) => {
                stored.title = book.title;
                stored.author = book.author;
                stored.published_date = book.published_date;
                Ok(true)
            }
            None => {
                tracing::debug!(%id, "update requested for unknown book");
                Ok(false)
            }
        }
    }

    async fn delete_book(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.books.write().await.remove(&id).is_some();
        if !removed {
            tracing::debug!(%id, "delete requested for unknown book");
        }
        Ok(removed)
    }
}
