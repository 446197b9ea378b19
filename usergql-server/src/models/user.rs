//! The `User` record and its create/update inputs.

use sqlx::FromRow;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

/// Fields for a new user. The id is assigned by storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Materialize as a stored row with the given id.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            country: self.country,
            city: self.city,
            phone: self.phone,
        }
    }
}

/// Update instruction for a nullable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the stored value as is.
    #[default]
    Keep,
    /// Set the column to NULL.
    Clear,
    /// Overwrite with a value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value),
        }
    }
}

/// Partial update of a user.
///
/// `name` and `email` are NOT NULL columns, so they only support keep or set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: FieldUpdate<i32>,
    pub country: FieldUpdate<String>,
    pub city: FieldUpdate<String>,
    pub phone: FieldUpdate<String>,
}

impl UserPatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.age.is_keep()
            && self.country.is_keep()
            && self.city.is_keep()
            && self.phone.is_keep()
    }

    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        self.age.apply_to(&mut user.age);
        self.country.apply_to(&mut user.country);
        self.city.apply_to(&mut user.city);
        self.phone.apply_to(&mut user.phone);
    }
}
