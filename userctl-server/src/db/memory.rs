//! In-memory store for tests and `serve --in-memory`

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{StoreError, UserStore};
use crate::models::{NewUser, User, UserId};

/// [`UserStore`] holding records in process memory.
///
/// Ids start at 1 and are never reused, like a `SERIAL` column. Creating
/// past `i32::MAX` fails instead of wrapping.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner.last_id.checked_add(1).ok_or_else(|| {
            StoreError::Backend(format!(
                "id sequence reached maximum value ({})",
                i32::MAX
            ))
        })?;
        let user = new.with_id(inner.last_id);
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&user.id) {
            Some(row) => {
                row.name.clone_from(&user.name);
                row.email.clone_from(&user.email);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: UserId) -> Result<u64, StoreError> {
        let removed = self.inner.write().await.rows.remove(&id.get());
        Ok(u64::from(removed.is_some()))
    }
}
