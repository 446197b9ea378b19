//! The store seam between resolvers and storage.

use std::sync::Arc;

use async_trait::async_trait;

use super::pool::Database;
use super::repos::{DbError, UserRepo};
use crate::models::{NewUser, User, UserPatch};

/// Storage operations the GraphQL resolvers depend on.
///
/// Absence is a normal outcome: `get` and `update` return `None` and `delete`
/// returns `false` for unknown ids. `Err` is reserved for storage failures.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Check that storage answers.
    async fn ping(&self) -> Result<(), DbError>;

    async fn list(&self) -> Result<Vec<User>, DbError>;

    async fn get(&self, id: i32) -> Result<Option<User>, DbError>;

    async fn create(&self, new: NewUser) -> Result<User, DbError>;

    async fn update(&self, id: i32, patch: UserPatch) -> Result<Option<User>, DbError>;

    async fn delete(&self, id: i32) -> Result<bool, DbError>;
}

/// Store handle placed in the GraphQL schema data.
pub type SharedStore = Arc<dyn UserStore>;

/// PostgreSQL-backed store: one session per call.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    db: Database,
}

impl PgUserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ping(&self) -> Result<(), DbError> {
        let mut session = self.db.session().await?;
        UserRepo::new(&mut session).ping().await
    }

    async fn list(&self) -> Result<Vec<User>, DbError> {
        let mut session = self.db.session().await?;
        UserRepo::new(&mut session).list().await
    }

    async fn get(&self, id: i32) -> Result<Option<User>, DbError> {
        let mut session = self.db.session().await?;
        UserRepo::new(&mut session).get(id).await
    }

    async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let mut session = self.db.session().await?;
        UserRepo::new(&mut session).insert(new).await
    }

    async fn update(&self, id: i32, patch: UserPatch) -> Result<Option<User>, DbError> {
        let mut session = self.db.session().await?;
        UserRepo::new(&mut session).update(id, patch).await
    }

    async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut session = self.db.session().await?;
        UserRepo::new(&mut session).delete(id).await
    }
}
