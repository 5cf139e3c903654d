//! Content-addressed analysis cache

use crate::backend::CacheBackend;
use crate::error::CacheError;
use edital_domain::AnalysisResult;
use sha2::{Digest, Sha256};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Prefix of every cache key
pub const KEY_PREFIX: &str = "analysis:";

/// Default bound on a single backend operation
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(500);

/// Cache key for `text`: [`KEY_PREFIX`] followed by the hex SHA-256 digest
pub fn cache_key(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{KEY_PREFIX}{}", hex::encode(hasher.finalize()))
}

/// Caches [`AnalysisResult`]s keyed by a digest of the analyzed text
///
/// Every failure is contained here: a backend error, a timeout or an
/// undecodable value is logged and reported as a miss, and a failed write
/// is logged and dropped.
#[derive(Clone)]
pub struct AnalysisCache {
    backend: Arc<dyn CacheBackend>,
    ttl: Duration,
    op_timeout: Duration,
}

impl std::fmt::Debug for AnalysisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisCache")
            .field("backend", &self.backend.name())
            .field("ttl", &self.ttl)
            .field("op_timeout", &self.op_timeout)
            .finish()
    }
}

impl AnalysisCache {
    /// Create a cache storing entries for `ttl`
    pub fn new(backend: Arc<dyn CacheBackend>, ttl: Duration) -> Self {
        Self {
            backend,
            ttl,
            op_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Bound every backend operation by `op_timeout`
    pub fn with_timeout(mut self, op_timeout: Duration) -> Self {
        self.op_timeout = op_timeout;
        self
    }

    /// Name of the backend
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Time-to-live of new entries
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Previously stored result for `text`, if any
    pub async fn get(&self, text: &str) -> Option<AnalysisResult> {
        let key = cache_key(text);
        let raw = match self.bounded(self.backend.get(&key)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                warn!("Cache read failed, treating as miss: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(result) => {
                debug!("Cache hit for {}", key);
                Some(result)
            }
            Err(e) => {
                warn!("Undecodable cache entry {}, treating as miss: {}", key, e);
                None
            }
        }
    }

    /// Store `result` for `text`
    pub async fn put(&self, text: &str, result: &AnalysisResult) {
        let key = cache_key(text);
        let value = match serde_json::to_string(result) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not serialize analysis for caching: {}", e);
                return;
            }
        };

        if let Err(e) = self.bounded(self.backend.set(&key, &value, self.ttl)).await {
            warn!("Cache write failed: {}", e);
        }
    }

    /// True if the backend answers a ping in time
    pub async fn is_connected(&self) -> bool {
        match self.bounded(self.backend.ping()).await {
            Ok(()) => true,
            Err(e) => {
                debug!("Cache ping failed: {}", e);
                false
            }
        }
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, CacheError>>,
    ) -> Result<T, CacheError> {
        tokio::time::timeout(self.op_timeout, operation)
            .await
            .map_err(|_| CacheError::Timeout(self.op_timeout.as_millis() as u64))?
    }
}
