use std::cell::Cell;

/// A counter that can be bumped through a shared reference.
///
/// Used for operations that take `&self` (e.g. `get`). The cell makes the
/// owning cache `!Sync`, which matches its single-threaded contract.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
