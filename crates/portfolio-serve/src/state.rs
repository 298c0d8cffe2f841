//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::store::{DocumentStore, SqliteStore};

/// Document store as seen by the handlers.
#[derive(Clone)]
pub enum StoreHandle {
    /// No `DATABASE_URL` was configured.
    Unconfigured,

    /// The store was configured but could not be opened.
    Failed(Arc<str>),

    /// The store is open.
    Ready(Arc<dyn DocumentStore>),
}

impl StoreHandle {
    /// Open the store named by the configuration.
    ///
    /// An open failure is logged and kept so diagnostics can report it.
    pub fn from_config(config: &Config) -> Self {
        let Some(url) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set, contact submissions are disabled");
            return Self::Unconfigured;
        };

        match SqliteStore::open(url, config.database_name.clone()) {
            Ok(store) => Self::Ready(Arc::new(store)),
            Err(e) => {
                tracing::error!(error = %e, "failed to open document store");
                Self::Failed(e.to_string().into())
            }
        }
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconfigured => f.write_str("Unconfigured"),
            Self::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
            Self::Ready(_) => f.write_str("Ready"),
        }
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Project catalog served by the read endpoints.
    pub catalog: Arc<Catalog>,

    /// Document store for contact submissions.
    pub store: StoreHandle,
}

impl AppState {
    /// Create application state with an explicit catalog and store.
    pub fn new(config: Config, catalog: Catalog, store: StoreHandle) -> Self {
        tracing::info!(
            projects = catalog.list_projects().len(),
            store = ?store,
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            store,
        }
    }

    /// Create application state from configuration with the demo catalog.
    pub fn from_config(config: Config) -> Self {
        let store = StoreHandle::from_config(&config);
        Self::new(config, Catalog::demo(), store)
    }
}
