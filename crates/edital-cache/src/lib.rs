//! Edital Cache Layer
//!
//! Content-addressed cache of analysis results with expiry.
//!
//! # Architecture
//!
//! - [`AnalysisCache`]: keys results by the SHA-256 of the analyzed text,
//!   stores them as JSON and fails open
//! - [`CacheBackend`]: pluggable key-value store with per-entry TTL
//!   - [`MemoryBackend`] (`memory://`): in-process map
//!   - [`SqliteBackend`] (`sqlite://<path>`): persistent table
//!
//! # Examples
//!
//! ```
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! use std::time::Duration;
//! use edital_cache::{open_backend, AnalysisCache};
//! use edital_domain::AnalysisResult;
//!
//! let backend = open_backend("memory://").unwrap();
//! let cache = AnalysisCache::new(backend, Duration::from_secs(3600));
//!
//! cache.put("texto do edital", &AnalysisResult::default()).await;
//! assert!(cache.get("texto do edital").await.is_some());
//! # });
//! ```

#![warn(missing_docs)]

mod backend;
mod cache;
mod error;
mod memory;
mod sqlite;

use std::sync::Arc;
use tracing::info;

pub use backend::CacheBackend;
pub use cache::{cache_key, AnalysisCache, DEFAULT_OPERATION_TIMEOUT, KEY_PREFIX};
pub use error::CacheError;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Open the backend named by `url`
///
/// - `memory://`: a fresh [`MemoryBackend`]
/// - `sqlite://:memory:`: an in-memory SQLite database
/// - `sqlite://<path>`: a SQLite database file
pub fn open_backend(url: &str) -> Result<Arc<dyn CacheBackend>, CacheError> {
    let backend: Arc<dyn CacheBackend> = if url == "memory://" {
        Arc::new(MemoryBackend::new())
    } else if let Some(path) = url.strip_prefix("sqlite://") {
        match path {
            "" => return Err(CacheError::InvalidUrl(format!("{url}: missing database path"))),
            ":memory:" => Arc::new(SqliteBackend::open_in_memory()?),
            path => Arc::new(SqliteBackend::open(path)?),
        }
    } else {
        return Err(CacheError::InvalidUrl(format!(
            "{url}: expected memory:// or sqlite://<path>"
        )));
    };

    info!("Opened {} cache backend", backend.name());
    Ok(backend)
}
