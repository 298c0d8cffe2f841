//! SQLite-backed document store.
//!
//! All collections share one `documents` table; each row keeps its
//! collection name next to the JSON body.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use serde_json::Value;

use super::{DocumentStore, StoreError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS documents (
    id          TEXT PRIMARY KEY,
    collection  TEXT NOT NULL,
    body        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection);
";

/// Document store on a single SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    name: String,
}

impl SqliteStore {
    /// Open the database named by `url`, creating the schema if needed.
    ///
    /// `url` may be `sqlite://<path>`, `sqlite:<path>`, a bare path, or
    /// `:memory:`. When `name` is `None` the file stem is used.
    pub fn open(url: &str, name: Option<String>) -> Result<Self, StoreError> {
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.execute_batch(SCHEMA)?;

        let name = name.unwrap_or_else(|| default_name(path));
        tracing::info!(path = %path, name = %name, "document store opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            name,
        })
    }

    /// Open a private in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::open(":memory:", None)
    }
}

fn default_name(path: &str) -> String {
    if path == ":memory:" {
        return "memory".to_string();
    }
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        let Value::Object(mut fields) = document else {
            return Err(StoreError::NotAnObject);
        };

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        fields.insert("created_at".to_string(), Value::String(now.clone()));
        fields.insert("updated_at".to_string(), Value::String(now.clone()));

        let id = uuid::Uuid::new_v4().to_string();
        let body = serde_json::to_string(&fields)?;

        self.conn.lock().execute(
            "INSERT INTO documents (id, collection, body, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![id, collection, body, now],
        )?;

        tracing::debug!(collection = %collection, id = %id, "document created");
        Ok(id)
    }

    fn database_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}
