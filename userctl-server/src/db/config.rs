//! Store connection settings
//!
//! Defaults reproduce the fixed deployment this service was built for:
//! `root:secret@localhost:5432/go_crud` with TLS disabled.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// PostgreSQL connection settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: PgSslMode,
}

impl StoreConfig {
    /// Build driver connect options from these settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode)
    }

    /// Connection target for log lines (no password).
    pub fn target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "root".to_string(),
            password: "secret".to_string(),
            database: "go_crud".to_string(),
            ssl_mode: PgSslMode::Disable,
        }
    }
}
