//! In-process cache backend

use crate::backend::CacheBackend;
use crate::error::CacheError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CachedItem {
    value: String,
    /// `None` when `now + ttl` is past the clock's range
    expires_at: Option<Instant>,
}

impl CachedItem {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|deadline| now < deadline)
    }
}

/// `HashMap` backend living as long as the process
///
/// Expiry uses the tokio clock, so tests can drive it with a paused runtime.
/// Expired entries are dropped lazily on write and by [`MemoryBackend::purge_expired`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RwLock<HashMap<String, CachedItem>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired or not
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// True if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|_, item| item.is_live(now));
        before - items.len()
    }
}

#[async_trait]
impl CacheBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        let items = self.items.read().await;
        Ok(items
            .get(key)
            .filter(|item| item.is_live(now))
            .map(|item| item.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let now = Instant::now();
        let mut items = self.items.write().await;
        items.retain(|_, item| item.is_live(now));
        items.insert(
            key.to_string(),
            CachedItem {
                value: value.to_string(),
                expires_at: now.checked_add(ttl),
            },
        );
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
