//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits and an acquire
//! timeout, so an unreachable store fails fast instead of parking requests.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default database location, created on first open.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://itemctl.db?mode=rwc";

/// Pool settings
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// Create a SQLite connection pool.
///
/// In-memory URLs get a single pinned connection, since every SQLite
/// connection to `:memory:` opens its own private database.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&PoolConfig::new("sqlite://items.db?mode=rwc")).await?;
/// ```
pub async fn create_pool(config: &PoolConfig) -> Result<SqlitePool, sqlx::Error> {
    if config.is_in_memory() {
        if config.max_connections != 1 {
            tracing::info!(
                requested = config.max_connections,
                "in-memory database: pool pinned to a single connection"
            );
        }
        return memory_pool(config.acquire_timeout).await;
    }

    let options = SqliteConnectOptions::from_str(&config.database_url)?;
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// The single connection is never recycled, otherwise the data would
/// vanish with it.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    memory_pool(DEFAULT_ACQUIRE_TIMEOUT).await
}

async fn memory_pool(acquire_timeout: Duration) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(acquire_timeout)
        .connect("sqlite::memory:")
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_acquires_connection() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn memory_url_keeps_state_across_queries() {
        let pool = create_pool(&PoolConfig::new("sqlite::memory:"))
            .await
            .expect("pool creation failed");

        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .expect("create failed");
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM t")
            .fetch_one(&pool)
            .await
            .expect("table should still exist");

        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn memory_url_honours_acquire_timeout() {
        let config = PoolConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 8,
            acquire_timeout: Duration::from_millis(50),
        };
        let pool = create_pool(&config).await.expect("pool creation failed");

        // the only connection is checked out, so the next acquire times out
        let _held = pool.acquire().await.unwrap();
        let started = std::time::Instant::now();
        let second = pool.acquire().await;

        assert!(matches!(second, Err(sqlx::Error::PoolTimedOut)));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let pool = create_pool(&PoolConfig::new(url)).await.expect("pool creation failed");
        pool.close().await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn unreachable_database_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("items.db");
        let url = format!("sqlite://{}", path.display());

        let result = create_pool(&PoolConfig::new(url)).await;
        assert!(result.is_err());
    }

    #[test]
    fn default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
