//! Domain types shared by the storage layer and the GraphQL layer.

pub mod user;

pub use user::{FieldUpdate, NewUser, User, UserPatch};
