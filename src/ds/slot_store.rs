//! Fixed-length slot storage for cache entries.
//!
//! A [`SlotStore`] is a boxed slice of `capacity` slots, each either empty or
//! holding one `(key, value)` pair. The length is fixed at construction; no
//! operation grows or shrinks it. Slot allocation is not decided here: the
//! caller picks the slot (see [`FreeSlots`](crate::ds::FreeSlots)).
//!
//! Addressing a slot outside `[0, capacity)` is a programming error and
//! panics.

/// Index of a physical slot in a [`SlotStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct SlotStore<K, V> {
    slots: Box<[Option<(K, V)>]>,
    occupied: usize,
}

impl<K, V> SlotStore<K, V> {
    /// Creates a store of `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            occupied: 0,
        }
    }

    /// Returns the pair held at `slot`, or `None` if the slot is empty.
    #[inline]
    pub fn read(&self, slot: SlotId) -> Option<(&K, &V)> {
        self.slots[slot.0].as_ref().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn value_mut(&mut self, slot: SlotId) -> Option<&mut V> {
        self.slots[slot.0].as_mut().map(|(_, v)| v)
    }

    /// Stores `(key, value)` at `slot`, returning whatever was there before.
    #[inline]
    pub fn write(&mut self, slot: SlotId, key: K, value: V) -> Option<(K, V)> {
        let previous = self.slots[slot.0].replace((key, value));
        if previous.is_none() {
            self.occupied += 1;
        }
        previous
    }

    /// Empties `slot`, returning the pair it held.
    #[inline]
    pub fn clear(&mut self, slot: SlotId) -> Option<(K, V)> {
        let previous = self.slots[slot.0].take();
        if previous.is_some() {
            self.occupied -= 1;
        }
        previous
    }

    #[inline]
    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.slots[slot.0].is_some()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empties every slot. Capacity is unchanged.
    pub fn clear_all(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.occupied = 0;
    }

    /// Iterates occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &K, &V)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|(k, v)| (SlotId(idx), k, v)))
    }
}
