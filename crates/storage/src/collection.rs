//! Insertion-ordered concurrent collection
//!
//! DashMap keyed by record id, FxHash for the hasher. Every entry carries
//! the sequence number it was assigned on first insertion; scans sort by
//! it so callers see entries in creation order.
//!
//! # Ordering
//!
//! - Overwriting or updating an existing key keeps its sequence number.
//! - Removing a key and inserting it again assigns a fresh (larger) one,
//!   moving the key to the end.
//!
//! # Thread Safety
//!
//! - Point reads and writes lock only the shard holding the key.
//! - Closures passed to [`Collection::update`] and [`Collection::upsert_with`]
//!   run under that shard's write lock and must not touch the same
//!   collection again.
//! - Scans take shard read locks one at a time; they are not a
//!   point-in-time snapshot across concurrent writers.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU64, Ordering};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Stored value plus its insertion sequence
#[derive(Debug, Clone)]
struct Slot<V> {
    seq: u64,
    value: V,
}

/// Concurrent map from id to record, scanned in insertion order
pub struct Collection<V> {
    /// Name used in Debug output and logs
    name: &'static str,
    entries: DashMap<String, Slot<V>, FxBuildHasher>,
    /// Next insertion sequence
    seq: AtomicU64,
}

impl<V: Clone> Collection<V> {
    /// Create an empty collection
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: DashMap::with_hasher(FxBuildHasher::default()),
            seq: AtomicU64::new(0),
        }
    }

    /// Collection name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::AcqRel)
    }

    /// Get a copy of the value stored under `key`
    #[inline]
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|slot| slot.value.clone())
    }

    /// Insert or overwrite. Returns the previous value if there was one.
    /// An overwritten key keeps its position.
    pub fn put(&self, key: impl Into<String>, value: V) -> Option<V> {
        match self.entries.entry(key.into()) {
            Entry::Occupied(mut occupied) => {
                Some(std::mem::replace(&mut occupied.get_mut().value, value))
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Slot {
                    seq: self.next_seq(),
                    value,
                });
                None
            }
        }
    }

    /// Insert only if `key` is absent. Returns true if the value was
    /// inserted, false if an entry already existed (which is left as is).
    pub fn insert_if_absent(&self, key: impl Into<String>, value: V) -> bool {
        match self.entries.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(Slot {
                    seq: self.next_seq(),
                    value,
                });
                true
            }
        }
    }

    /// Return the existing value, or insert the one built by `create` and
    /// return that. The bool is true if `create` ran.
    pub fn get_or_insert_with<F>(&self, key: impl Into<String>, create: F) -> (V, bool)
    where
        F: FnOnce() -> V,
    {
        match self.entries.entry(key.into()) {
            Entry::Occupied(occupied) => (occupied.get().value.clone(), false),
            Entry::Vacant(vacant) => {
                let value = create();
                vacant.insert(Slot {
                    seq: self.next_seq(),
                    value: value.clone(),
                });
                (value, true)
            }
        }
    }

    /// Mutate the value under `key` in place. Returns `None` if absent.
    pub fn update<F, R>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        self.entries
            .get_mut(key)
            .map(|mut slot| f(&mut slot.value))
    }

    /// Apply `update` to the existing value, or insert `create(arg)` if the
    /// key is absent. `arg` goes to whichever closure runs. Returns a copy of
    /// the stored value and whether it was created.
    pub fn upsert_with<A, C, U>(
        &self,
        key: impl Into<String>,
        arg: A,
        create: C,
        update: U,
    ) -> (V, bool)
    where
        C: FnOnce(A) -> V,
        U: FnOnce(&mut V, A),
    {
        match self.entries.entry(key.into()) {
            Entry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                update(&mut slot.value, arg);
                (slot.value.clone(), false)
            }
            Entry::Vacant(vacant) => {
                let value = create(arg);
                vacant.insert(Slot {
                    seq: self.next_seq(),
                    value: value.clone(),
                });
                (value, true)
            }
        }
    }

    /// Remove a key, returning its value if it existed
    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|(_, slot)| slot.value)
    }

    /// Copy of every value, in insertion order
    pub fn snapshot(&self) -> Vec<V> {
        self.scan(|_| true)
    }

    /// Copy of every value matching `pred`, in insertion order
    pub fn scan<P>(&self, mut pred: P) -> Vec<V>
    where
        P: FnMut(&V) -> bool,
    {
        let mut hits: Vec<(u64, V)> = self
            .entries
            .iter()
            .filter(|entry| pred(&entry.value().value))
            .map(|entry| (entry.value().seq, entry.value().value.clone()))
            .collect();
        hits.sort_unstable_by_key(|(seq, _)| *seq);
        hits.into_iter().map(|(_, value)| value).collect()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<(u64, String)> = self
            .entries
            .iter()
            .map(|entry| (entry.value().seq, entry.key().clone()))
            .collect();
        keys.sort_unstable_by_key(|(seq, _)| *seq);
        keys.into_iter().map(|(_, key)| key).collect()
    }
}

impl<V> std::fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .finish()
    }
}
