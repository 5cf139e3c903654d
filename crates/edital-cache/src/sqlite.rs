//! SQLite cache backend

use crate::backend::CacheBackend;
use crate::error::CacheError;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Persistent backend storing entries in an `analysis_cache` table
///
/// Expiry is wall-clock based (`expires_at` in unix milliseconds), so
/// entries survive restarts. Queries run on the blocking thread pool and
/// share one connection behind a mutex.
///
/// # Examples
///
/// ```no_run
/// use edital_cache::SqliteBackend;
///
/// let backend = SqliteBackend::open("edital-cache.db").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBackend {
    /// Open (or create) the database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Delete every expired row, returning how many were removed
    pub async fn purge_expired(&self) -> Result<usize, CacheError> {
        let now = now_millis();
        let removed = self
            .run(move |conn| {
                Ok(conn.execute(
                    "DELETE FROM analysis_cache WHERE expires_at <= ?1",
                    params![now],
                )?)
            })
            .await?;
        debug!("Purged {} expired cache rows", removed);
        Ok(removed)
    }

    /// Number of stored rows, expired or not
    pub async fn len(&self) -> Result<usize, CacheError> {
        self.run(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM analysis_cache", [], |row| row.get(0))?;
            Ok(count as usize)
        })
        .await
    }

    /// Run `f` with the connection on the blocking pool
    async fn run<T, F>(&self, f: F) -> Result<T, CacheError>
    where
        F: FnOnce(&Connection) -> Result<T, CacheError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| CacheError::Unavailable("sqlite connection lock poisoned".to_string()))?;
            f(&conn)
        })
        .await
        .map_err(|e| CacheError::Unavailable(format!("sqlite worker failed: {e}")))?
    }
}

#[async_trait]
impl CacheBackend for SqliteBackend {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let key = key.to_string();
        let now = now_millis();
        self.run(move |conn| {
            Ok(conn
                .query_row(
                    "SELECT value FROM analysis_cache WHERE key = ?1 AND expires_at > ?2",
                    params![key, now],
                    |row| row.get(0),
                )
                .optional()?)
        })
        .await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let key = key.to_string();
        let value = value.to_string();
        let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at = now_millis().saturating_add(ttl_millis);
        self.run(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO analysis_cache (key, value, expires_at) VALUES (?1, ?2, ?3)",
                params![key, value, expires_at],
            )?;
            Ok(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), CacheError> {
        self.run(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
