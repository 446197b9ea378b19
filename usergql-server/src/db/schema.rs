//! Table bootstrap for the `users` table

use super::pool::Database;
use super::repos::DbError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        age INTEGER,
        country TEXT,
        city TEXT,
        phone TEXT
    )
"#;

const CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS ix_users_id ON users(id)",
    "CREATE INDEX IF NOT EXISTS ix_users_name ON users(name)",
    "CREATE INDEX IF NOT EXISTS ix_users_email ON users(email)",
];

/// Create the `users` table and its indexes if absent.
///
/// Safe to run on every start; existing rows are untouched.
pub async fn ensure_schema(db: &Database) -> Result<(), DbError> {
    tracing::info!("Ensuring users schema...");

    sqlx::query(CREATE_USERS).execute(db.pool()).await?;

    for statement in CREATE_INDEXES {
        sqlx::query(statement).execute(db.pool()).await?;
    }

    tracing::info!("Users schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConfig;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let db = Database::connect(&DatabaseConfig::new(url))
            .await
            .expect("pool creation failed");

        ensure_schema(&db).await.expect("first run failed");
        let (before,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .expect("count failed");

        ensure_schema(&db).await.expect("second run failed");
        let (after,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .expect("count failed");

        assert_eq!(before, after);
    }
}
