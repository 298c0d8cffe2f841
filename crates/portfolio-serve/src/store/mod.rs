//! Document storage for contact submissions.
//!
//! Handlers only see the [`DocumentStore`] trait. The binary builds a
//! concrete store from configuration at startup and injects it into
//! [`crate::AppState`]; tests substitute an in-memory fake.

pub mod sqlite;

use async_trait::async_trait;
use serde_json::Value;

pub use self::sqlite::SqliteStore;

/// Errors raised by a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No store has been configured for this process.
    #[error("database not available: DATABASE_URL is not set")]
    Unavailable,

    /// The document was not a JSON object.
    #[error("document must be a JSON object")]
    NotAnObject,

    /// SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// JSON encoding failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by some other storage backend.
    #[error("{0}")]
    Backend(String),
}

/// A store that persists JSON documents into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection` and return the generated id.
    async fn create_document(&self, collection: &str, document: Value)
    -> Result<String, StoreError>;

    /// Human-readable database name, if the backend has one.
    fn database_name(&self) -> Option<String> {
        None
    }

    /// Names of collections that currently hold documents, sorted.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}
