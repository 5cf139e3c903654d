//! Integration tests for the persistent cache backend

use edital_cache::{open_backend, AnalysisCache, CacheBackend, SqliteBackend};
use edital_domain::{AnalysisResult, EntityCategory, ExtractedEntity, HeaderInfo};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn sample() -> AnalysisResult {
    AnalysisResult {
        header: HeaderInfo {
            process_number: Some("045/2023".to_string()),
            ..Default::default()
        },
        entities: vec![ExtractedEntity {
            category: EntityCategory::Place,
            value: "Recife".to_string(),
            confidence: 0.8,
            start: 0,
            end: 6,
        }],
        requirements: Vec::new(),
    }
}

#[tokio::test]
async fn test_entries_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.db");

    {
        let backend = Arc::new(SqliteBackend::open(&path).unwrap());
        let cache = AnalysisCache::new(backend, Duration::from_secs(3600));
        cache.put("Recife, edital 045/2023", &sample()).await;
    }

    let backend = Arc::new(SqliteBackend::open(&path).unwrap());
    let cache = AnalysisCache::new(backend, Duration::from_secs(3600));
    assert_eq!(cache.get("Recife, edital 045/2023").await, Some(sample()));
}

#[tokio::test]
async fn test_open_backend_by_url() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("by-url.db").display());

    let backend = open_backend(&url).unwrap();
    assert_eq!(backend.name(), "sqlite");
    assert!(backend.ping().await.is_ok());

    let cache = AnalysisCache::new(backend, Duration::from_secs(60));
    assert!(cache.is_connected().await);
    assert_eq!(cache.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_zero_ttl_entries_are_never_served() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(SqliteBackend::open(dir.path().join("ttl.db")).unwrap());
    let cache = AnalysisCache::new(backend.clone(), Duration::ZERO);

    cache.put("texto", &sample()).await;
    assert_eq!(cache.get("texto").await, None);
    assert_eq!(backend.purge_expired().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_writers_leave_one_row() {
    let backend = Arc::new(SqliteBackend::open_in_memory().unwrap());
    let cache = AnalysisCache::new(backend.clone(), Duration::from_secs(60));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.put("mesmo texto", &sample()).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(backend.len().await.unwrap(), 1);
    assert_eq!(cache.get("mesmo texto").await, Some(sample()));
}
