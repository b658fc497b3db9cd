//! Placement order sequences: panel references interleaved with row breaks.

use alloc::vec::Vec;

/// One slot in a placement order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Place the panel with this index at the active staircase corner.
    Panel(usize),
    /// Move the placement cursor one step back up the staircase,
    /// starting a new row. A no-op when the cursor is already at the top.
    RowBreak,
}

/// An ordered sequence of `2N` slots encoding a placement order.
///
/// The multiset of slots is fixed at construction: each of the `N` panel
/// indices exactly once, plus `N` row breaks. The only mutation is a
/// transposition of two slots, so the invariant holds across the whole
/// search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderSequence {
    slots: Vec<Slot>,
}

impl OrderSequence {
    /// The initial order for `panel_count` panels: positions `[0, N)` hold
    /// the panel indices in input order, positions `[N, 2N)` are row breaks.
    pub fn initial(panel_count: usize) -> Self {
        let mut slots = Vec::with_capacity(2 * panel_count);
        slots.extend((0..panel_count).map(Slot::Panel));
        slots.extend(core::iter::repeat_n(Slot::RowBreak, panel_count));
        Self { slots }
    }

    /// Total number of slots (`2N`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence is empty (only for a zero-panel sequence,
    /// which validation rejects upstream).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slots in placement order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Transpose the slots at positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
