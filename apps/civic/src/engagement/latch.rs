use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

/// Per-key "already in flight" flags. A key is held from `try_acquire`
/// until the returned guard drops, whatever path the caller exits by.
pub struct InFlightLatch<K: Eq + Hash + Clone> {
    held: Mutex<HashSet<K>>,
}

impl<K: Eq + Hash + Clone> Default for InFlightLatch<K> {
    fn default() -> Self {
        Self {
            held: Mutex::new(HashSet::new()),
        }
    }
}

impl<K: Eq + Hash + Clone> InFlightLatch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// None when the key is already held.
    pub fn try_acquire(&self, key: &K) -> Option<InFlightGuard<'_, K>> {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        if !held.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            latch: self,
            key: key.clone(),
        })
    }

    pub fn is_held(&self, key: &K) -> bool {
        self.held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

pub struct InFlightGuard<'a, K: Eq + Hash + Clone> {
    latch: &'a InFlightLatch<K>,
    key: K,
}

impl<K: Eq + Hash + Clone> Drop for InFlightGuard<'_, K> {
    fn drop(&mut self) {
        self.latch
            .held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
