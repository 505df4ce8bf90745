//! Store port
//!
//! Handlers reach the store only through [`UserStore`], injected into the
//! HTTP state at construction. Production wires [`PgUserStore`]; tests use
//! [`MemoryUserStore`] or a stub.
//!
//! [`PgUserStore`]: super::PgUserStore
//! [`MemoryUserStore`]: super::MemoryUserStore

use async_trait::async_trait;

use crate::models::{NewUser, User, UserId};

/// Store operation error.
///
/// Displays as the driver's own text, which is what clients see.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// Failure raised by a non-SQL adapter
    #[error("{0}")]
    Backend(String),
}

/// Access to the `users` table
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a record and return it with the store-assigned id.
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;

    /// Every record, unordered.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Replace name and email of the record with `user.id`.
    ///
    /// Returns rows affected; 0 when no such record exists.
    async fn update(&self, user: &User) -> Result<u64, StoreError>;

    /// Remove the record with `id`. Returns rows affected.
    async fn delete(&self, id: UserId) -> Result<u64, StoreError>;
}
