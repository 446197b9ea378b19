//! Mutation root: create, partial update, and delete of users.

#![allow(clippy::too_many_arguments)]

use async_graphql::{Context, MaybeUndefined, Object, Result};

use super::error::{internal, store};
use super::types::UserType;
use crate::models::{FieldUpdate, NewUser, UserPatch};

impl<T> From<MaybeUndefined<T>> for FieldUpdate<T> {
    fn from(value: MaybeUndefined<T>) -> Self {
        match value {
            MaybeUndefined::Undefined => Self::Keep,
            MaybeUndefined::Null => Self::Clear,
            MaybeUndefined::Value(value) => Self::Set(value),
        }
    }
}

#[derive(Default)]
pub struct Mutation;

#[Object(rename_fields = "snake_case")]
impl Mutation {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: Option<i32>,
        country: Option<String>,
        city: Option<String>,
        phone: Option<String>,
    ) -> Result<UserType> {
        let new = NewUser {
            name,
            email,
            age,
            country,
            city,
            phone,
        };
        let user = store(ctx)?.create(new).await.map_err(internal)?;
        tracing::debug!(user_id = user.id, "created user");
        Ok(user.into())
    }

    /// Overwrite the supplied fields. Omitted fields keep their value; an
    /// explicit null clears `age`, `country`, `city` and `phone` but is
    /// ignored for `name` and `email`.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        email: Option<String>,
        age: MaybeUndefined<i32>,
        country: MaybeUndefined<String>,
        city: MaybeUndefined<String>,
        phone: MaybeUndefined<String>,
    ) -> Result<Option<UserType>> {
        let patch = UserPatch {
            name,
            email,
            age: age.into(),
            country: country.into(),
            city: city.into(),
            phone: phone.into(),
        };
        let user = store(ctx)?.update(id, patch).await.map_err(internal)?;
        tracing::debug!(user_id = id, found = user.is_some(), "updated user");
        Ok(user.map(UserType::from))
    }

    /// True if a user was deleted, false if none had this id.
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<bool> {
        let deleted = store(ctx)?.delete(id).await.map_err(internal)?;
        tracing::debug!(user_id = id, deleted, "deleted user");
        Ok(deleted)
    }
}
