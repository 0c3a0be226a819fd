//! Item repository
//!
//! Each method is exactly one statement against `items`:
//! - create: INSERT ... RETURNING
//! - update/delete: UPDATE/DELETE ... RETURNING, no row means not found
//! - list: ORDER BY id with LIMIT/OFFSET, no total count

use sqlx::SqliteConnection;

use super::DbError;
use crate::models::{Item, ItemCreate, ListWindow};

/// Item repository over one checked-out connection
pub struct ItemRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ItemRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a new item; the store assigns the id.
    pub async fn create(&mut self, payload: &ItemCreate) -> Result<Item, DbError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES (?1, ?2)
            RETURNING id, name, description
            "#,
        )
        .bind(payload.name.as_str())
        .bind(payload.description.as_deref())
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    /// Point lookup by id.
    pub async fn get(&mut self, id: i64) -> Result<Option<Item>, DbError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, description FROM items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(item)
    }

    /// Items in id order, `window.skip` rows skipped, at most `window.limit` returned.
    pub async fn list(&mut self, window: ListWindow) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(items)
    }

    /// Replace every business field of an existing item.
    pub async fn update(&mut self, id: i64, payload: &ItemCreate) -> Result<Option<Item>, DbError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = ?1, description = ?2
            WHERE id = ?3
            RETURNING id, name, description
            "#,
        )
        .bind(payload.name.as_str())
        .bind(payload.description.as_deref())
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        if item.is_some() {
            tracing::debug!(id, "item updated");
        }
        Ok(item)
    }

    /// Remove an item, returning the row as it was.
    pub async fn delete(&mut self, id: i64) -> Result<Option<Item>, DbError> {
        let item = sqlx::query_as::<_, Item>(
            "DELETE FROM items WHERE id = ?1 RETURNING id, name, description",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        if item.is_some() {
            tracing::debug!(id, "item deleted");
        }
        Ok(item)
    }

    /// Trivial round trip to check the store answers.
    pub async fn ping(&mut self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }
}
