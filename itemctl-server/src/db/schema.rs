//! Table bootstrap
//!
//! Creates the `items` table when it is missing. There is no versioned
//! migration history; the table shape is fixed.

use sqlx::SqlitePool;

use super::DbError;

/// Create the `items` table if it does not exist yet.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)")
        .execute(pool)
        .await?;

    tracing::info!("items table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
