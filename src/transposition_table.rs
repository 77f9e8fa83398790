// Transposition table
//
// Direct-mapped cache of prior search results keyed by the position hash.
// One entry per slot, slot count a power of two, slot = hash & (slots - 1).
// Writes unconditionally overwrite whatever the slot held: a shallow result
// can evict a deeper one on a shared bucket. That costs some hit quality and
// is the accepted trade-off; anything smarter (depth-preferred replacement,
// aging) changes measured strength and is out of scope here.

use crate::interface::SearchMove;

/// How a stored score relates to the window it was searched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is exact: the node was searched inside its window.
    Exact,
    /// The score is a lower bound: the node failed high.
    Lower,
    /// The score is an upper bound: every move failed low.
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TableEntry<M> {
    pub hash: u64,
    pub best_move: M,
    /// Remaining depth when the entry was stored. Quiescence nodes store
    /// zero or negative depths.
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
}

pub struct TranspositionTable<M> {
    slots: Vec<Option<TableEntry<M>>>,
    mask: u64,
}

impl<M: SearchMove> TranspositionTable<M> {
    /// Default slot count; at roughly 32 bytes per entry this is a few tens
    /// of megabytes.
    pub const DEFAULT_SLOTS: usize = 1 << 20;

    pub fn new() -> Self {
        Self::with_slots(Self::DEFAULT_SLOTS)
    }

    /// Create a table with at least `requested` slots, rounded up to the
    /// next power of two.
    pub fn with_slots(requested: usize) -> Self {
        let slots = requested.max(1).next_power_of_two();
        Self {
            slots: vec![None; slots],
            mask: (slots - 1) as u64,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Look up the entry for `hash`. Returns `None` on an empty slot or
    /// when another position occupies the bucket.
    pub fn probe(&self, hash: u64) -> Option<&TableEntry<M>> {
        let entry = self.slots[(hash & self.mask) as usize].as_ref()?;
        (entry.hash == hash).then_some(entry)
    }

    /// Store an entry. Last write wins.
    pub fn store(&mut self, entry: TableEntry<M>) {
        let slot = (entry.hash & self.mask) as usize;
        self.slots[slot] = Some(entry);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

impl<M: SearchMove> Default for TranspositionTable<M> {
    fn default() -> Self {
        Self::new()
    }
}
