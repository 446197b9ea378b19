//! Storage failures as GraphQL errors, and store lookup from resolver context.

use async_graphql::{Context, Error, ErrorExtensions};

use crate::db::{DbError, SharedStore};

/// Log a storage failure and hand the client a generic error.
pub(crate) fn internal(err: DbError) -> Error {
    tracing::error!(error = %err, "storage failure");
    Error::new("an internal error occurred").extend_with(|_, ext| ext.set("code", "INTERNAL"))
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}
