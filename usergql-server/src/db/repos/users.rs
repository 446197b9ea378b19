//! User repository
//!
//! Every operation is a single statement on the borrowed session:
//! - update: one `UPDATE ... RETURNING`, so a missing id writes nothing
//! - delete: one `DELETE`, existence decided by the affected row count

use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::models::{FieldUpdate, NewUser, User, UserPatch};

const USER_COLUMNS: &str = "id, name, email, age, country, city, phone";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("user id sequence exhausted")]
    IdsExhausted,
}

/// Pushes `column = value` or `column = NULL` for a nullable column.
macro_rules! push_update {
    ($set:expr, $column:literal, $update:expr) => {
        match $update {
            FieldUpdate::Keep => {}
            FieldUpdate::Clear => {
                $set.push(concat!($column, " = NULL"));
            }
            FieldUpdate::Set(value) => {
                $set.push(concat!($column, " = ")).push_bind_unseparated(value);
            }
        }
    };
}

/// User repository bound to one session.
pub struct UserRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> UserRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Round trip on the session, used by the health check.
    pub async fn ping(&mut self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }

    /// All rows, in whatever order the planner returns them.
    pub async fn list(&mut self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users"))
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(users)
    }

    pub async fn get(&mut self, id: i32) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(user)
    }

    /// Insert a row and return it with its assigned id.
    pub async fn insert(&mut self, new: NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, age, country, city, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new.name)
        .bind(new.email)
        .bind(new.age)
        .bind(new.country)
        .bind(new.city)
        .bind(new.phone)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(user)
    }

    /// Overwrite the supplied fields of row `id`.
    ///
    /// Returns `None` when no row has that id. An empty patch reads the row
    /// without writing.
    pub async fn update(&mut self, id: i32, patch: UserPatch) -> Result<Option<User>, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE users SET ");
        {
            let mut set = query.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(email) = patch.email {
                set.push("email = ").push_bind_unseparated(email);
            }
            push_update!(set, "age", patch.age);
            push_update!(set, "country", patch.country);
            push_update!(set, "city", patch.city);
            push_update!(set, "phone", patch.phone);
        }
        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING ")
            .push(USER_COLUMNS);

        let user = query
            .build_query_as::<User>()
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(user)
    }

    /// Delete row `id`. Returns whether a row was removed.
    pub async fn delete(&mut self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
