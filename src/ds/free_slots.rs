//! Free-slot allocator for a fixed-capacity slot store.
//!
//! Tracks which slot indices in `[0, capacity)` are not backing any entry.
//! Two sources feed [`FreeSlots::acquire`]:
//!
//! ```text
//!   recycled: VecDeque<usize>      fresh cursor
//!   ┌────┬────┬────┐               0 ........ fresh ........ capacity
//!   │ 4  │ 1  │ 7  │               [ issued at least once ][ never issued ]
//!   └────┴────┴────┘
//!     ▲ Fifo pops front              acquire() falls back here once the
//!               ▲ Lifo pops back     recycle list is empty
//! ```
//!
//! - Slots below the cursor have been issued at least once; a released slot
//!   goes onto the recycle list.
//! - Slots at or above the cursor have never been issued and are free by
//!   construction; they never enter the recycle list.
//! - A per-slot `recycled_mask` marks which issued slots sit on the recycle
//!   list. Releasing a slot that is already free panics, so each index
//!   appears at most once and the list never grows beyond `capacity`.
//!
//! Both `acquire` and `release` are O(1). The order in which slots come back
//! out is controlled by [`ReuseOrder`] and never affects correctness, only
//! which physical slot a key lands in.

use std::collections::VecDeque;

use crate::ds::slot_store::SlotId;

/// Which released slot [`FreeSlots::acquire`] hands out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReuseOrder {
    /// Last released, first reused (stack).
    #[default]
    Lifo,
    /// First released, first reused (queue).
    Fifo,
}

#[derive(Debug)]
pub struct FreeSlots {
    capacity: usize,
    fresh: usize,
    recycled: VecDeque<usize>,
    /// `true` while the slot is on `recycled`.
    recycled_mask: Box<[bool]>,
    order: ReuseOrder,
}

impl FreeSlots {
    /// Creates an allocator with every slot in `[0, capacity)` free.
    pub fn new(capacity: usize, order: ReuseOrder) -> Self {
        Self {
            capacity,
            fresh: 0,
            recycled: VecDeque::new(),
            recycled_mask: vec![false; capacity].into_boxed_slice(),
            order,
        }
    }

    /// Takes a free slot, or returns `None` when every slot is in use.
    #[inline]
    pub fn acquire(&mut self) -> Option<SlotId> {
        let recycled = match self.order {
            ReuseOrder::Lifo => self.recycled.pop_back(),
            ReuseOrder::Fifo => self.recycled.pop_front(),
        };
        if let Some(idx) = recycled {
            self.recycled_mask[idx] = false;
            return Some(SlotId(idx));
        }
        if self.fresh < self.capacity {
            let idx = self.fresh;
            self.fresh += 1;
            return Some(SlotId(idx));
        }
        None
    }

    /// Returns a previously acquired slot to the pool.
    ///
    /// # Panics
    ///
    /// Panics if `slot` was never handed out by [`acquire`](Self::acquire),
    /// or if it is already free.
    #[inline]
    pub fn release(&mut self, slot: SlotId) {
        assert!(
            slot.0 < self.fresh,
            "released slot {} was never acquired (issued: {})",
            slot.0,
            self.fresh
        );
        assert!(
            !self.recycled_mask[slot.0],
            "released slot {} is already free",
            slot.0
        );
        self.recycled_mask[slot.0] = true;
        self.recycled.push_back(slot.0);
        debug_assert!(self.recycled.len() <= self.fresh, "recycle list overflow");
    }

    /// Number of free slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.recycled.len() + (self.capacity - self.fresh)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn order(&self) -> ReuseOrder {
        self.order
    }

    /// Marks every slot free again.
    pub fn reset(&mut self) {
        self.fresh = 0;
        self.recycled.clear();
        self.recycled_mask.fill(false);
    }

    /// Iterates every free slot. O(free slots); meant for audits.
    pub fn iter(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.recycled
            .iter()
            .copied()
            .chain(self.fresh..self.capacity)
            .map(SlotId)
    }
}
