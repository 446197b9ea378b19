//! GraphQL output types.

use async_graphql::SimpleObject;

use crate::models::User;

/// A user as exposed over GraphQL.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "UserType")]
pub struct UserType {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl From<User> for UserType {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            country: user.country,
            city: user.city,
            phone: user.phone,
        }
    }
}
