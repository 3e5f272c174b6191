pub mod free_slots;
pub mod key_index;
pub mod slot_store;

pub use free_slots::{FreeSlots, ReuseOrder};
pub use key_index::KeyIndex;
pub use slot_store::{SlotId, SlotStore};
