use std::fmt::Debug;
use std::hash::Hash;

use trsy_integration::FnvIndexMap;

/// Whether a [`KeyedCache::upsert`] created a fresh entry or replaced an
/// existing one. Drives the `ProcessAdd` vs `ProcessUpdate` fan-out choice
/// every service in this system makes on ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Replaced,
}

/// Insertion-ordered key/value cache shared by every domain service.
///
/// Backed by [`FnvIndexMap`] rather than `std::collections::HashMap` so
/// that anything which iterates the cache (the position service computing
/// an aggregate, a historical sink dumping its contents) sees entries in
/// the order they were first ingested, not an arbitrary hash order.
#[derive(Debug, Clone)]
pub struct KeyedCache<K, V> {
    entries: FnvIndexMap<K, V>,
}

impl<K, V> Default for KeyedCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::default(),
        }
    }

    /// Insert or replace the entry at `key`, reporting which happened.
    pub fn upsert(&mut self, key: K, value: V) -> UpsertOutcome {
        match self.entries.insert(key, value) {
            Some(_) => UpsertOutcome::Replaced,
            None => UpsertOutcome::Added,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the entry at `key`, inserting `default()` if absent. Reports
    /// whether the entry already existed, for callers that need to decide
    /// between firing `ProcessAdd` and `ProcessUpdate`.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> (&mut V, UpsertOutcome) {
        let outcome = if self.entries.contains_key(&key) {
            UpsertOutcome::Replaced
        } else {
            UpsertOutcome::Added
        };
        (self.entries.entry(key).or_insert_with(default), outcome)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> KeyedCache<K, V>
where
    K: Eq + Hash + Debug,
{
    /// Look up `key`, panicking if it was never ingested. A miss here means
    /// a downstream service was handed a key its upstream never published.
    pub fn get(&self, key: &K) -> &V {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("KeyedCache: no entry for key {key:?}"))
    }
}
