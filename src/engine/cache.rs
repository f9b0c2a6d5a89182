use crate::engine::ResolutionResult;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::trace;

const DEFAULT_MAX_ENTRIES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DisplayName,
    Link,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::DisplayName => "name",
            Operation::Link => "link",
        }
    }
}

/// Cache key for one resolution. `language_id` is always a concrete language,
/// never the "current language" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub operation: Operation,
    pub expression: String,
    pub language_id: u32,
}

impl CacheKey {
    pub fn new(operation: Operation, expression: impl Into<String>, language_id: u32) -> Self {
        Self {
            operation,
            expression: expression.into(),
            language_id,
        }
    }
}

/// Memoization store for resolution results.
///
/// Eviction and expiry belong to the implementation. Stored entries are never
/// overwritten while they are live.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<ResolutionResult>;

    /// Store `value` unless a live entry exists, returning whichever is stored.
    fn insert_if_absent(&self, key: CacheKey, value: ResolutionResult) -> ResolutionResult;

    fn invalidate(&self, key: &CacheKey);

    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the cached value or run `compute` and store its result.
    ///
    /// `compute` runs without any cache lock held. Concurrent misses on one
    /// key may both compute; the first stored result is returned to both.
    fn get_or_compute(
        &self,
        key: CacheKey,
        compute: &dyn Fn() -> ResolutionResult,
    ) -> ResolutionResult {
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        let value = compute();
        self.insert_if_absent(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// `None` keeps entries until evicted or invalidated
    pub ttl: Option<Duration>,

    /// Approximate size limit. The check and the insert are not one atomic
    /// step, so concurrent inserts can overshoot by up to one entry per
    /// writer; the next insert evicts back under the limit. `0` disables
    /// storing.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: None,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: ResolutionResult,
    inserted_at: Instant,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

/// In-process cache backed by a concurrent map.
///
/// Eviction drops the oldest entry by insertion time and scans the whole map
/// to find it, so each eviction is linear in the cache size.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<CacheKey, CacheEntry>,
    config: CacheConfig,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    fn new_entry(&self, value: ResolutionResult) -> CacheEntry {
        let now = Instant::now();
        CacheEntry {
            value,
            inserted_at: now,
            expires_at: self.config.ttl.map(|ttl| now + ttl),
        }
    }

    fn evict_oldest(&self) {
        let oldest_key = self
            .entries
            .iter()
            .min_by_key(|entry| entry.inserted_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest_key {
            trace!(expression = %key.expression, "evicting oldest cache entry");
            self.entries.remove(&key);
        }
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<ResolutionResult> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_live(now) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        }
        None
    }

    fn insert_if_absent(&self, key: CacheKey, value: ResolutionResult) -> ResolutionResult {
        if let Some(existing) = self.get(&key) {
            return existing;
        }

        if self.config.max_entries == 0 {
            return value;
        }
        while self.entries.len() >= self.config.max_entries {
            self.evict_oldest();
        }

        let now = Instant::now();
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_live(now) {
                    occupied.get().value.clone()
                } else {
                    occupied.insert(self.new_entry(value.clone()));
                    value
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(self.new_entry(value.clone()));
                value
            }
        }
    }

    fn invalidate(&self, key: &CacheKey) {
        self.entries.remove(key);
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
