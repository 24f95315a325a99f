//! Identifier index: stable node id → record rank.
//!
//! A packed deque covering every id in `[min_id, max_id]`. Slot
//! `id - min_id` holds `rank + 1`, with 0 meaning unmapped. New ids below
//! the minimum are prepended and ids above the maximum appended, so the
//! covered range only ever grows.

use crate::handle::NodeId;
use crate::packed::PackedDeque;

use super::nodes::RecordIx;

#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    slots: PackedDeque,
    min_id: u64,
}

impl IdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Smallest id covered, if any.
    pub fn min_id(&self) -> Option<NodeId> {
        (!self.is_empty()).then(|| NodeId::from(self.min_id))
    }

    /// Largest id covered, if any.
    pub fn max_id(&self) -> Option<NodeId> {
        (!self.is_empty()).then(|| NodeId::from(self.min_id + self.slots.len() as u64 - 1))
    }

    /// Number of ids covered, mapped or not.
    pub fn span(&self) -> usize {
        self.slots.len()
    }

    /// Span the index would cover after `ensure_range(id)`.
    pub fn span_with(&self, id: NodeId) -> u64 {
        let id = id.get();
        match (self.min_id(), self.max_id()) {
            (Some(min), Some(max)) => max.get().max(id) - min.get().min(id) + 1,
            _ => 1,
        }
    }

    /// Extend coverage at either end so that `id` has a slot.
    pub fn ensure_range(&mut self, id: NodeId) {
        let id = id.get();
        let Some(max) = self.max_id().map(NodeId::get) else {
            self.slots.push_back(0);
            self.min_id = id;
            return;
        };
        if id < self.min_id {
            for _ in id..self.min_id {
                self.slots.push_front(0);
            }
            self.min_id = id;
        } else if id > max {
            for _ in max..id {
                self.slots.push_back(0);
            }
        }
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        let id = id.get();
        if self.is_empty() || id < self.min_id {
            return None;
        }
        let slot = (id - self.min_id) as usize;
        (slot < self.slots.len()).then_some(slot)
    }

    /// Rank of the record holding `id`, if it is live.
    pub fn get(&self, id: NodeId) -> Option<RecordIx> {
        let slot = self.slot(id)?;
        match self.slots.get(slot) {
            0 => None,
            v => Some(v as RecordIx - 1),
        }
    }

    /// Map `id` to `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is outside the covered range; call `ensure_range` first.
    pub fn set(&mut self, id: NodeId, rank: RecordIx) {
        let slot = self
            .slot(id)
            .unwrap_or_else(|| panic!("node id {} outside the indexed range", id));
        self.slots.set(slot, rank as u64 + 1);
    }

    pub fn heap_bytes(&self) -> usize {
        self.slots.heap_bytes()
    }

    pub fn width(&self) -> u32 {
        self.slots.width()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.min_id = 0;
    }
}
