//! GraphQL schema: one query root, one mutation root, no subscriptions.

mod error;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

use crate::db::SharedStore;

pub use mutation::Mutation;
pub use query::Query;
pub use types::UserType;

pub type UserSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the executable schema with `store` injected as resolver data.
pub fn build_schema(store: SharedStore) -> UserSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .finish()
}

/// SDL of the schema, without any store attached.
pub fn sdl() -> String {
    Schema::build(Query, Mutation, EmptySubscription)
        .finish()
        .sdl()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_uses_snake_case_roots() {
        let sdl = sdl();
        assert!(sdl.contains("get_users: [UserType!]!"));
        assert!(sdl.contains("get_user_by_id(id: Int!): UserType"));
        assert!(sdl.contains("delete_user(id: Int!): Boolean!"));
        assert!(sdl.contains("type UserType"));
        assert!(!sdl.contains("Subscription"));
    }
}
