pub use crate::builder::CacheBuilder;
pub use crate::ds::{FreeSlots, KeyIndex, ReuseOrder, SlotId, SlotStore};
pub use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::RandomMetricsSnapshot;
pub use crate::policy::random::RandomCache;
pub use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};
