//! User repository over PostgreSQL
//!
//! Expects a pre-created table:
//!
//! ```sql
//! CREATE TABLE users (id SERIAL PRIMARY KEY, name TEXT, email TEXT);
//! ```

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{FromRow, PgPool};

use crate::db::store::{StoreError, UserStore};
use crate::models::{NewUser, User, UserId};

/// User record as read from the database
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// [`UserStore`] backed by the shared connection handle
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id"#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(new.with_id(id))
    }

    /// Streams rows one at a time. The cursor lives in `rows` and is
    /// released when it drops, on success and on every `?` exit.
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut rows =
            sqlx::query_as::<_, UserRow>(r#"SELECT id, name, email FROM users"#).fetch(&self.pool);

        let mut users = Vec::new();
        while let Some(row) = rows.try_next().await? {
            users.push(User::from(row));
        }

        Ok(users)
    }

    async fn update(&self, user: &User) -> Result<u64, StoreError> {
        let result = sqlx::query(r#"UPDATE users SET name=$1, email=$2 WHERE id=$3"#)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: UserId) -> Result<u64, StoreError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id=$1"#)
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
