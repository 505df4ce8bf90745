//! userctl-server: HTTP CRUD over a single `users` table
//!
//! Four routes, each decoding a request, issuing one statement against
//! the store, and encoding the response. The store is reached through the
//! [`db::UserStore`] port injected into [`AppState`].

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{connect, connect_url, MemoryUserStore, PgUserStore, StoreConfig, StoreError, UserStore};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{NewUser, User, UserId};
pub use state::AppState;
