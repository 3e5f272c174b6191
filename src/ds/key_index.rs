//! Key to slot mapping.
//!
//! [`KeyIndex`] is the reverse lookup that lets the cache reach a key's slot
//! in O(1) average time. It holds only the binding; the entry itself lives in
//! the [`SlotStore`](crate::ds::SlotStore).

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::slot_store::SlotId;
use crate::error::CacheError;

#[derive(Debug)]
pub struct KeyIndex<K> {
    map: FxHashMap<K, SlotId>,
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the slot bound to `key`.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<SlotId> {
        self.map.get(key).copied()
    }

    /// Binds `key` to `slot`.
    ///
    /// The key must not already be bound; rebinding would orphan the old slot.
    #[inline]
    pub fn bind(&mut self, key: K, slot: SlotId) {
        let previous = self.map.insert(key, slot);
        debug_assert!(previous.is_none(), "key rebound without unbind");
    }

    /// Removes the binding for `key`, returning the slot it pointed at.
    #[inline]
    pub fn unbind(&mut self, key: &K) -> Result<SlotId, CacheError> {
        self.map.remove(key).ok_or(CacheError::KeyNotFound)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, SlotId)> {
        self.map.iter().map(|(k, &slot)| (k, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_lookup_unbind() {
        let mut index = KeyIndex::with_capacity(4);
        index.bind("a", SlotId(2));
        index.bind("b", SlotId(0));

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup(&"a"), Some(SlotId(2)));
        assert_eq!(index.lookup(&"b"), Some(SlotId(0)));
        assert!(index.contains(&"a"));

        assert_eq!(index.unbind(&"a"), Ok(SlotId(2)));
        assert_eq!(index.lookup(&"a"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn unbind_missing_key_fails() {
        let mut index: KeyIndex<u32> = KeyIndex::with_capacity(1);
        assert_eq!(index.unbind(&9), Err(CacheError::KeyNotFound));

        index.bind(9, SlotId(0));
        assert_eq!(index.unbind(&9), Ok(SlotId(0)));
        assert_eq!(index.unbind(&9), Err(CacheError::KeyNotFound));
    }

    #[test]
    fn clear_drops_all_bindings() {
        let mut index = KeyIndex::with_capacity(2);
        index.bind(1, SlotId(0));
        index.bind(2, SlotId(1));
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rebound")]
    fn rebinding_is_a_bug() {
        let mut index = KeyIndex::with_capacity(2);
        index.bind(1, SlotId(0));
        index.bind(1, SlotId(1));
    }
}
