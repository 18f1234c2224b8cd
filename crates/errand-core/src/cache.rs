//! Bounded time-to-live cache.
//!
//! A [`TtlCache`] is an ordinary value: whoever creates it owns it, and
//! components that need it receive a handle (usually an `Arc`). Entries
//! expire once they are older than the cache's time-to-live, and when the
//! cache is full the oldest insertion is evicted.

use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
    sync::{Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use serde::Serialize;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

struct CacheState<K, V> {
    entries: HashMap<K, Entry<V>>,
    // Keys in insertion order, oldest first.
    order: VecDeque<K>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash + Clone, V> CacheState<K, V> {
    fn remove(&mut self, key: &K) {
        self.entries.remove(key);
        if let Some(position) = self.order.iter().position(|k| k == key) {
            self.order.remove(position);
        }
    }

    fn purge_expired(&mut self, ttl: Duration) -> usize {
        let expired: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.inserted_at.elapsed() >= ttl)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            self.remove(key);
        }
        expired.len()
    }
}

/// Point-in-time counters for a cache.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub ttl_secs: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe cache with per-entry expiry and a maximum size.
pub struct TtlCache<K, V> {
    ttl: Duration,
    capacity: usize,
    state: Mutex<CacheState<K, V>>,
}

impl<K: Eq + Hash + Clone, V: Clone> TtlCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries for `ttl`
    /// each.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<K, V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the live value for `key`, dropping it if expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut state = self.lock();

        let expired = match state.entries.get(key) {
            Some(entry) => entry.inserted_at.elapsed() >= self.ttl,
            None => {
                state.misses += 1;
                return None;
            }
        };

        if expired {
            state.remove(key);
            state.misses += 1;
            return None;
        }

        state.hits += 1;
        state.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        let mut state = self.lock();
        state.remove(&key);
        state.purge_expired(self.ttl);

        while state.entries.len() >= self.capacity {
            match state.order.pop_front() {
                Some(oldest) => {
                    state.entries.remove(&oldest);
                }
                None => break,
            }
        }

        state.order.push_back(key.clone());
        state.entries.insert(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.lock().purge_expired(self.ttl)
    }

    /// Removes all entries. Hit and miss counters are kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            entries: state.entries.len(),
            capacity: self.capacity,
            ttl_secs: self.ttl.as_secs(),
            hits: state.hits,
            misses: state.misses,
        }
    }
}
