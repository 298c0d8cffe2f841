//! Application configuration loaded from environment variables.

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8000").
    pub bind_addr: String,

    /// Document store URL. `None` runs the service without a database.
    pub database_url: Option<String>,

    /// Name reported by the document store (defaults to the file stem).
    pub database_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Listen port on all interfaces (default: 8000)
    /// - `DATABASE_URL`: SQLite database, e.g. "sqlite://portfolio.db"
    /// - `DATABASE_NAME`: Name shown by the diagnostics endpoint
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid PORT value {raw:?}: {e}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = format!("0.0.0.0:{port}");

        let database_url = non_empty_var("DATABASE_URL");
        let database_name = non_empty_var("DATABASE_NAME");

        tracing::info!(
            bind_addr = %bind_addr,
            database_configured = database_url.is_some(),
            database_name = ?database_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            database_name,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
