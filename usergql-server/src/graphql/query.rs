//! Query root: list users and fetch one by id.

use async_graphql::{Context, Object, Result};

use super::error::{internal, store};
use super::types::UserType;

#[derive(Default)]
pub struct Query;

#[Object(rename_fields = "snake_case")]
impl Query {
    /// Every user, unordered and unpaginated.
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserType>> {
        let users = store(ctx)?.list().await.map_err(internal)?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users.into_iter().map(UserType::from).collect())
    }

    /// The user with this id, or null.
    async fn get_user_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<UserType>> {
        let user = store(ctx)?.get(id).await.map_err(internal)?;
        tracing::debug!(user_id = id, found = user.is_some(), "fetched user");
        Ok(user.map(UserType::from))
    }
}
