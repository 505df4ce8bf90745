//! Database layer - connection handle, store port and its adapters
//!
//! # Design Principles
//!
//! - One connection handle opened at startup, shared by every request
//! - One SQL statement per store operation
//! - Update and delete never check for existence first

pub mod config;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use config::StoreConfig;
pub use memory::MemoryUserStore;
pub use pool::{connect, connect_url};
pub use repos::PgUserStore;
pub use store::{StoreError, UserStore};
