//! In-memory TTL cache for forecast points.
//!
//! One instance is shared process-wide behind an `Arc` and injected into
//! every client, so independent requests for the same coordinates reuse
//! the stored sequence instead of hitting the provider again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Generic TTL key/value store.
///
/// Expiry is checked lazily on `get`; `set` overwrites any existing entry
/// and re-arms its TTL. Safe to share across threads.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Store a value under `key`, replacing any previous entry.
    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
    }

    /// Return the value for `key`, or `None` if absent or expired.
    /// Expired entries are removed on access.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Drop every entry. Used to reset state between independent runs.
    pub fn flush_all(&self) {
        self.entries.lock().clear();
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
