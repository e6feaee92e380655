use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Hash map behind a single reader/writer lock.
///
/// Sized for administrative tables: every operation holds the lock only for
/// the in-memory work it does, and no method hands out a guard, so callers
/// cannot keep it across an `.await`.
pub struct ConcurrentTable<K, V> {
    inner: RwLock<FxHashMap<K, V>>,
}

impl<K, V> Default for ConcurrentTable<K, V> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<K, V> ConcurrentTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert; returns the value that was replaced, if any.
    pub fn store(&self, key: K, value: V) -> Option<V> {
        self.write().insert(key, value)
    }

    pub fn load(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    /// Atomic read-and-remove.
    pub fn load_and_delete(&self, key: &K) -> Option<V> {
        self.write().remove(key)
    }

    /// Removes every mapping the predicate accepts, under one write lock, and
    /// returns what was removed.
    pub fn delete_matching<F>(&self, mut predicate: F) -> FxHashMap<K, V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut map = self.write();
        let doomed: Vec<K> = map
            .iter()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, _)| k.clone())
            .collect();

        let mut removed = FxHashMap::default();
        for key in doomed {
            if let Some(value) = map.remove(&key) {
                removed.insert(key, value);
            }
        }
        removed
    }

    /// Full copy taken under the read lock.
    pub fn snapshot(&self) -> FxHashMap<K, V> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written map behind
    // (every mutation is a single std map call), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
