//! # Bounded Cache
//!
//! A map-like store with a hard capacity limit and FIFO eviction.
//!
//! ## Eviction Model
//!
//! The cache keeps an insertion log alongside the map. Every call to
//! [`BoundedCache::set`] records one insertion event; once the log grows past
//! the capacity, the key of the *oldest event* is evicted from both the log
//! and the map. Two consequences follow and are part of the contract:
//!
//! 1. Lookups never protect an entry. This is a FIFO cache, not an LRU one:
//!    reading a value does not move it in the log.
//! 2. Re-inserting an existing key records a second event. When the first
//!    event of that key reaches the front of the log, the map entry is
//!    removed even though a newer insertion of the same key exists further
//!    back. Hot keys that are repeatedly overwritten therefore age out on
//!    the schedule of their oldest insertion.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use log::trace;

/// A fixed-capacity key-value store with insertion-order (FIFO) eviction.
///
/// Entries are immutable once stored; eviction drops values silently and
/// there is no notification hook. Capacity is enforced on every insertion,
/// so the map never holds more than `capacity` entries.
pub struct BoundedCache<K, V> {
    map: HashMap<K, V>,
    insertion_log: VecDeque<K>,
    capacity: NonZeroUsize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is rejected at the type level: callers must supply a
    /// [`NonZeroUsize`].
    pub fn new(capacity: NonZeroUsize) -> Self {
        BoundedCache {
            map: HashMap::new(),
            insertion_log: VecDeque::with_capacity(capacity.get() + 1),
            capacity,
        }
    }

    /// Looks up the value stored under `key`.
    ///
    /// This is an O(1) read that does not influence eviction order.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Inserts `value` under `key`, overwriting any existing entry.
    ///
    /// Records one insertion event. If the number of recorded events now
    /// exceeds the capacity, the key of the oldest event is evicted, even if
    /// that key was overwritten by a later insertion.
    pub fn set(&mut self, key: K, value: V) {
        self.map.insert(key.clone(), value);
        self.insertion_log.push_back(key);

        if self.insertion_log.len() > self.capacity.get() {
            if let Some(oldest) = self.insertion_log.pop_front() {
                trace!("bounded cache evicting {:?}", oldest);
                self.map.remove(&oldest);
            }
        }
    }

    /// Number of entries currently resident in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
