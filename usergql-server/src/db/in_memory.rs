//! In-memory user store.
//!
//! Keeps users in a map guarded by an async mutex. Suitable for tests and
//! local runs without PostgreSQL. Data is lost on restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::repos::DbError;
use super::store::UserStore;
use crate::models::{NewUser, User, UserPatch};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

/// In-memory implementation of [`UserStore`].
///
/// Ids come from a counter that never goes backwards, so deleted ids are not
/// reused. `list` returns rows in id order.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    table: Arc<Mutex<Table>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, DbError> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<User>, DbError> {
        let table = self.table.lock().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let mut table = self.table.lock().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or(DbError::IdsExhausted)?;
        table.last_id = id;
        let user = new.into_user(id);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, patch: UserPatch) -> Result<Option<User>, DbError> {
        let mut table = self.table.lock().await;
        let Some(user) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(user);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldUpdate;

    #[tokio::test]
    async fn ids_are_unique_and_not_reused() {
        let store = InMemoryUserStore::new();
        let a = store.create(NewUser::new("A", "a@x.com")).await.unwrap();
        let b = store.create(NewUser::new("B", "b@x.com")).await.unwrap();
        assert_ne!(a.id, b.id);

        assert!(store.delete(b.id).await.unwrap());
        let c = store.create(NewUser::new("C", "c@x.com")).await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn create_fails_once_ids_run_out() {
        let store = InMemoryUserStore {
            table: Arc::new(Mutex::new(Table {
                last_id: i32::MAX,
                rows: BTreeMap::new(),
            })),
        };

        let err = store.create(NewUser::new("A", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, DbError::IdsExhausted));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_on_missing_id_writes_nothing() {
        let store = InMemoryUserStore::new();
        let existing = store.create(NewUser::new("A", "a@x.com")).await.unwrap();

        let patch = UserPatch {
            city: FieldUpdate::Set("Lima".into()),
            ..Default::default()
        };
        assert_eq!(store.update(existing.id + 1, patch).await.unwrap(), None);
        assert_eq!(store.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let store = InMemoryUserStore::new();
        let user = store.create(NewUser::new("A", "a@x.com")).await.unwrap();

        assert!(store.delete(user.id).await.unwrap());
        assert!(!store.delete(user.id).await.unwrap());
        assert_eq!(store.get(user.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = InMemoryUserStore::new();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(NewUser::new(format!("user{i}"), format!("u{i}@x.com")))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
