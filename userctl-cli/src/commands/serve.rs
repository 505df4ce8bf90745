//! HTTP server command
//!
//! Opens the store connection, serves until shutdown, then closes it.
//! Failing to reach the store at startup ends the process.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use sqlx::postgres::PgSslMode;

use userctl_server::{
    connect, connect_url, run_server, MemoryUserStore, PgUserStore, ServerConfig, StoreConfig,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERCTL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Database URL (overrides the --db-* settings)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Keep records in process memory instead of PostgreSQL (ignores store settings)
    #[arg(long)]
    pub in_memory: bool,
}

/// PostgreSQL connection settings
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Database host
    #[arg(long = "db-host", env = "PGHOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(long = "db-port", env = "PGPORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "PGUSER", default_value = "root")]
    pub user: String,

    /// Database password
    #[arg(
        long = "db-password",
        env = "PGPASSWORD",
        default_value = "secret",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// Database name
    #[arg(long = "db-name", env = "PGDATABASE", default_value = "go_crud")]
    pub database: String,

    /// TLS mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long = "db-sslmode", env = "PGSSLMODE", default_value = "disable")]
    pub ssl_mode: PgSslMode,
}

impl From<StoreArgs> for StoreConfig {
    fn from(args: StoreArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.password,
            database: args.database,
            ssl_mode: args.ssl_mode,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    if args.in_memory {
        tracing::warn!("Using in-memory store; records are lost on exit");
        return run_server(Arc::new(MemoryUserStore::new()), config)
            .await
            .context("Server error");
    }

    let pool = match args.database_url {
        Some(url) => {
            tracing::info!("Connecting to store via DATABASE_URL");
            connect_url(&url).await
        }
        None => {
            let store_config = StoreConfig::from(args.store);
            tracing::info!(target_db = %store_config.target(), "Connecting to store");
            connect(&store_config).await
        }
    }
    .context("Failed to connect to store")?;

    let result = run_server(Arc::new(PgUserStore::new(pool.clone())), config).await;

    pool.close().await;
    tracing::info!("Store connection closed");

    result.context("Server error")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        ServeArgs::try_parse_from(std::iter::once("serve").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn store_flags_override_defaults() {
        let args = parse(&["--db-host", "db", "--db-port", "6432", "--db-sslmode", "require"]);
        let config = StoreConfig::from(args.store);
        assert_eq!(config.host, "db");
        assert_eq!(config.port, 6432);
        assert!(matches!(config.ssl_mode, PgSslMode::Require));
    }

    #[test]
    fn bad_sslmode_is_rejected() {
        assert!(ServeArgs::try_parse_from(["serve", "--db-sslmode", "sometimes"]).is_err());
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let args = ServeArgs::try_parse_from(["serve", "--in-memory"]).unwrap();
        assert!(args.in_memory);
        assert_eq!(args.bind.port(), 8080);
    }
}
