//! Application state shared across handlers

use std::sync::Arc;

use crate::db::SharedStore;
use crate::graphql::{build_schema, UserSchema};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: SharedStore,
    schema: UserSchema,
}

impl AppState {
    /// Build the schema around `store` and keep a handle for health checks.
    pub fn new(store: SharedStore) -> Self {
        let schema = build_schema(store.clone());
        Self {
            inner: Arc::new(AppStateInner { store, schema }),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.inner.store
    }

    pub fn schema(&self) -> &UserSchema {
        &self.inner.schema
    }
}
