//! PostgreSQL repository implementations
//!
//! Each operation is a single parameterized statement; no transactions.

pub mod users;

pub use users::PgUserStore;
