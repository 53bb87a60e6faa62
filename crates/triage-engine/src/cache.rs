//! Query result caching for the diagnosis engine.
//!
//! Provides an LRU cache with TTL expiration for caching ranked diagnosis
//! lists. Thread-safe using `Mutex` for LRU operations.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::config::CacheConfig;
use crate::result::Diagnosis;

/// A cached ranked result with expiration tracking.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached ranked diagnoses.
    result: Vec<Diagnosis>,
    /// When this entry was created.
    created_at: Instant,
}

impl CacheEntry {
    fn new(result: Vec<Diagnosis>) -> Self {
        Self {
            result,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Thread-safe LRU cache with TTL expiration for diagnosis results.
///
/// Keys are normalized queries (see [`query_cache_key`]); the key preserves
/// symptom order and duplicates because both affect the output.
pub struct QueryCache {
    /// The LRU cache wrapped in a mutex for thread-safety.
    inner: Mutex<LruCache<String, CacheEntry>>,
    /// Time-to-live for cache entries.
    ttl: Duration,
}

impl QueryCache {
    /// Creates a new query cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_capacity(config.max_entries, config.ttl)
    }

    /// Creates a cache with custom capacity and TTL.
    ///
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Gets a cached result by key.
    ///
    /// Returns `None` if the key is absent or the entry has expired. On a
    /// hit, the entry is promoted to most-recently-used.
    pub fn get(&self, key: &str) -> Option<Vec<Diagnosis>> {
        let mut cache = self.inner.lock().ok()?;

        if let Some(entry) = cache.get(key) {
            if entry.is_expired(self.ttl) {
                cache.pop(key);
                return None;
            }
            return Some(entry.result.clone());
        }

        None
    }

    /// Stores a result in the cache, evicting the least recently used entry
    /// if full.
    pub fn set(&self, key: String, result: Vec<Diagnosis>) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.put(key, CacheEntry::new(result));
        }
    }

    /// Checks if a key exists in the cache (without affecting LRU order or
    /// checking expiration).
    pub fn contains(&self, key: &str) -> bool {
        match self.inner.lock() {
            Ok(cache) => cache.contains(key),
            _ => false,
        }
    }

    /// Returns the number of entries currently in the cache, expired
    /// entries included.
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(cache) => cache.len(),
            _ => 0,
        }
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.clear();
        }
    }

    /// Removes expired entries. Expiration is otherwise handled lazily on
    /// `get`.
    pub fn cleanup_expired(&self) {
        if let Ok(mut cache) = self.inner.lock() {
            let ttl = self.ttl;
            let expired_keys: Vec<String> = cache
                .iter()
                .filter(|(_, entry)| entry.is_expired(ttl))
                .map(|(key, _)| key.clone())
                .collect();

            for key in expired_keys {
                cache.pop(&key);
            }
        }
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        match self.inner.lock() {
            Ok(cache) => {
                let total = cache.len();
                let expired = cache
                    .iter()
                    .filter(|(_, entry)| entry.is_expired(self.ttl))
                    .count();

                CacheStats {
                    total_entries: total,
                    expired_entries: expired,
                    valid_entries: total.saturating_sub(expired),
                }
            }
            _ => CacheStats::default(),
        }
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("QueryCache")
            .field("entries", &stats.total_entries)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Statistics about the cache state.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Total number of entries in the cache.
    pub total_entries: usize,
    /// Number of expired entries (not yet cleaned up).
    pub expired_entries: usize,
    /// Number of valid (non-expired) entries.
    pub valid_entries: usize,
}

/// Builds a cache key from an already-normalized symptom query.
///
/// Tokens are joined with a unit separator so multi-word symptoms cannot
/// collide with adjacent tokens. Order and duplicates are kept: both change
/// the ranked output.
pub fn query_cache_key(query: &[String]) -> String {
    query.join("\u{1f}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use triage_catalog::Severity;

    fn create_test_cache(max_entries: usize, ttl_secs: u64) -> QueryCache {
        QueryCache::with_capacity(max_entries, Duration::from_secs(ttl_secs))
    }

    fn create_result(disease: &str) -> Vec<Diagnosis> {
        vec![Diagnosis {
            disease: disease.to_string(),
            match_score: 100.0,
            confidence: 40.0,
            overall_score: 76.0,
            matched_symptoms: vec!["sneezing".to_string()],
            severity: Severity::Low,
            description: "desc".to_string(),
            recommendations: vec![],
        }]
    }

    #[test]
    fn test_cache_new() {
        let cache = QueryCache::new(CacheConfig::default());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_get() {
        let cache = create_test_cache(100, 300);
        let result = create_result("Common Cold");

        cache.set("fever".to_string(), result.clone());

        let cached = cache.get("fever").expect("Should have cached value");
        assert_eq!(cached, result);
    }

    #[test]
    fn test_cache_miss() {
        let cache = create_test_cache(100, 300);
        assert!(cache.get("nonexistent").is_none());
    }

    #[test]
    fn test_cache_clear() {
        let cache = create_test_cache(100, 300);

        cache.set("key1".to_string(), create_result("a"));
        cache.set("key2".to_string(), create_result("b"));
        assert_eq!(cache.len(), 2);

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("key1").is_none());
    }

    #[test]
    fn test_cache_contains() {
        let cache = create_test_cache(100, 300);
        cache.set("exists".to_string(), create_result("a"));

        assert!(cache.contains("exists"));
        assert!(!cache.contains("not_exists"));
    }

    #[test]
    fn test_lru_eviction() {
        let cache = create_test_cache(3, 300);

        cache.set("key1".to_string(), create_result("a"));
        cache.set("key2".to_string(), create_result("b"));
        cache.set("key3".to_string(), create_result("c"));

        // Access key1 to make it recently used.
        let _ = cache.get("key1");

        // Adding a fourth entry evicts key2 (LRU).
        cache.set("key4".to_string(), create_result("d"));

        assert_eq!(cache.len(), 3);
        assert!(cache.get("key1").is_some());
        assert!(cache.get("key2").is_none());
        assert!(cache.get("key3").is_some());
        assert!(cache.get("key4").is_some());
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = QueryCache::with_capacity(100, Duration::from_millis(50));

        cache.set("expires".to_string(), create_result("a"));
        assert!(cache.get("expires").is_some());

        thread::sleep(Duration::from_millis(100));

        assert!(cache.get("expires").is_none());
    }

    #[test]
    fn test_ttl_cleanup() {
        let cache = QueryCache::with_capacity(100, Duration::from_millis(50));

        cache.set("key1".to_string(), create_result("a"));
        cache.set("key2".to_string(), create_result("b"));

        thread::sleep(Duration::from_millis(100));
        cache.cleanup_expired();

        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_stats() {
        let cache = QueryCache::with_capacity(100, Duration::from_millis(50));

        cache.set("key1".to_string(), create_result("a"));

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.valid_entries, 1);
        assert_eq!(stats.expired_entries, 0);

        thread::sleep(Duration::from_millis(100));

        let stats = cache.stats();
        assert_eq!(stats.valid_entries, 0);
        assert_eq!(stats.expired_entries, 1);
    }

    #[test]
    fn test_concurrent_access() {
        use std::sync::Arc;

        let cache = Arc::new(create_test_cache(1000, 300));
        let mut handles = vec![];

        for thread_id in 0..10 {
            let cache_clone = Arc::clone(&cache);
            let handle = thread::spawn(move || {
                for i in 0..10 {
                    let key = format!("thread{}_{}", thread_id, i);
                    let result = create_result(&key);
                    cache_clone.set(key.clone(), result.clone());

                    let cached = cache_clone.get(&key);
                    assert_eq!(cached, Some(result));
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().expect("Thread panicked");
        }

        assert_eq!(cache.len(), 100);
    }

    #[test]
    fn test_cache_update_existing_key() {
        let cache = create_test_cache(100, 300);

        cache.set("key".to_string(), create_result("a"));
        cache.set("key".to_string(), create_result("b"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key").unwrap()[0].disease, "b");
    }

    #[test]
    fn test_cache_empty_result() {
        let cache = create_test_cache(100, 300);

        // An empty ranked list is a valid cacheable answer.
        cache.set("no match".to_string(), Vec::new());

        let cached = cache.get("no match");
        assert_eq!(cached, Some(Vec::new()));
    }

    #[test]
    fn test_cache_min_capacity() {
        let cache = create_test_cache(0, 300);

        cache.set("key1".to_string(), create_result("a"));
        cache.set("key2".to_string(), create_result("b"));

        assert_eq!(cache.len(), 1);
        assert!(cache.get("key2").is_some());
    }

    #[test]
    fn test_query_cache_key_order_and_duplicates() {
        let a = vec!["fever".to_string(), "cough".to_string()];
        let b = vec!["cough".to_string(), "fever".to_string()];
        let c = vec!["fever".to_string(), "fever".to_string()];

        assert_ne!(query_cache_key(&a), query_cache_key(&b));
        assert_ne!(query_cache_key(&a), query_cache_key(&c));
        assert_eq!(query_cache_key(&a), query_cache_key(&a.clone()));
    }

    #[test]
    fn test_query_cache_key_no_collision_across_token_boundaries() {
        let a = vec!["runny nose".to_string(), "sneezing".to_string()];
        let b = vec!["runny".to_string(), "nose sneezing".to_string()];
        assert_ne!(query_cache_key(&a), query_cache_key(&b));
    }

    #[test]
    fn test_cache_debug() {
        let cache = create_test_cache(100, 300);
        cache.set("key".to_string(), create_result("a"));

        let debug = format!("{:?}", cache);
        assert!(debug.contains("QueryCache"));
        assert!(debug.contains("entries"));
    }
}
