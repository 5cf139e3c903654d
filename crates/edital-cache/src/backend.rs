//! Key-value backends with per-entry expiry

use crate::error::CacheError;
use async_trait::async_trait;
use std::time::Duration;

/// A string key-value store where every entry carries a time-to-live
///
/// Writes to an existing key replace it (last writer wins). Reads of an
/// expired entry return `None`.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Short backend name for status output (`memory`, `sqlite`)
    fn name(&self) -> &str;

    /// Value stored under `key`, if present and not expired
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key` for `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Check that the backend can serve requests
    async fn ping(&self) -> Result<(), CacheError>;
}
