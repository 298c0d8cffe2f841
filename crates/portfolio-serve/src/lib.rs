//! Portfolio Serve - HTTP API for an interior designer's portfolio site.
//!
//! Serves a fixed catalog of projects and stores contact form submissions
//! in a document store.
//!
//! # Architecture
//!
//! - **Catalog**: Immutable in-memory list of projects
//! - **Contact**: Validated submissions written through a [`DocumentStore`]
//! - **Store**: Document store trait with a SQLite implementation
//! - **Routes**: Endpoint handlers and the CORS policy

pub mod catalog;
pub mod config;
pub mod contact;
mod error;
mod extract;
mod routes;
mod state;
pub mod store;

pub use self::catalog::{Catalog, Project};
pub use self::config::Config;
pub use self::contact::{CONTACT_COLLECTION, ContactSubmission, EmailAddress};
pub use self::error::ApiError;
pub use self::extract::ValidatedJson;
pub use self::routes::{ContactAck, DiagnosticsReport, cors_layer, router};
pub use self::state::{AppState, StoreHandle};
pub use self::store::{DocumentStore, SqliteStore, StoreError};
