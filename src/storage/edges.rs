//! Edge adjacency store.
//!
//! Fixed-size records threaded into singly-linked lists inside one packed
//! array. Each record is `[target, next]`:
//!
//! ```text
//! target  encoded Handle of the other endpoint, oriented as you arrive
//!         when leaving the owning node through its end side
//! next    1-based index of the next record in the same list, 0 = end
//! ```
//!
//! Lists are prepend-only. A record's `next` is never rewritten once
//! written; only division and reorientation rewrite a `target` (see
//! `graph::mutation`).

use crate::handle::Handle;
use crate::packed::PackedVec;

pub const EDGE_RECORD_SIZE: usize = 2;
const EDGE_TARGET_OFFSET: usize = 0;
const EDGE_NEXT_OFFSET: usize = 1;

/// 1-based pointer into the edge store; 0 is the empty list.
pub type EdgeListIx = usize;

#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    records: PackedVec,
}

impl EdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(records: usize) -> Self {
        let mut store = Self::new();
        store.records.reserve(records * EDGE_RECORD_SIZE);
        store
    }

    /// Number of edge records.
    pub fn len(&self) -> usize {
        self.records.len() / EDGE_RECORD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and return its 1-based index.
    pub fn append_record(&mut self, target: Handle, next: EdgeListIx) -> EdgeListIx {
        self.records.push(target.as_integer());
        self.records.push(next as u64);
        self.len()
    }

    fn slot(ix: EdgeListIx) -> usize {
        debug_assert!(ix > 0, "edge list index 0 is the null pointer");
        (ix - 1) * EDGE_RECORD_SIZE
    }

    pub fn get_target(&self, ix: EdgeListIx) -> Handle {
        Handle::from_integer(self.records.get(Self::slot(ix) + EDGE_TARGET_OFFSET))
    }

    pub fn get_next(&self, ix: EdgeListIx) -> EdgeListIx {
        self.records.get(Self::slot(ix) + EDGE_NEXT_OFFSET) as EdgeListIx
    }

    pub(crate) fn set_target(&mut self, ix: EdgeListIx, target: Handle) {
        self.records
            .set(Self::slot(ix) + EDGE_TARGET_OFFSET, target.as_integer());
    }

    /// Walk the list starting at `head`, yielding `(record index, target)`.
    pub fn iter_list(&self, head: EdgeListIx) -> EdgeListIter<'_> {
        EdgeListIter { store: self, cursor: head }
    }

    /// Length of the list starting at `head`. O(length).
    pub fn list_len(&self, head: EdgeListIx) -> usize {
        self.iter_list(head).count()
    }

    pub fn heap_bytes(&self) -> usize {
        self.records.heap_bytes()
    }

    pub fn width(&self) -> u32 {
        self.records.width()
    }

    pub fn clear(&mut self) {
        self.records.clear(1);
    }
}

/// Iterator over one adjacency list.
pub struct EdgeListIter<'a> {
    store: &'a EdgeStore,
    cursor: EdgeListIx,
}

impl Iterator for EdgeListIter<'_> {
    type Item = (EdgeListIx, Handle);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == 0 {
            return None;
        }
        let ix = self.cursor;
        self.cursor = self.store.get_next(ix);
        Some((ix, self.store.get_target(ix)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::NodeId;

    fn fwd(id: u64) -> Handle {
        Handle::forward(NodeId::from(id))
    }

    #[test]
    fn test_append_returns_one_based_index() {
        let mut store = EdgeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.append_record(fwd(1), 0), 1);
        assert_eq!(store.append_record(fwd(2), 0), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_target(2), fwd(2));
        assert_eq!(store.get_next(2), 0);
    }

    #[test]
    fn test_prepend_list() {
        let mut store = EdgeStore::new();
        let mut head = 0;
        for id in 1..=3 {
            head = store.append_record(fwd(id), head);
        }
        let targets: Vec<Handle> = store.iter_list(head).map(|(_, t)| t).collect();
        assert_eq!(targets, vec![fwd(3), fwd(2), fwd(1)]);
        assert_eq!(store.list_len(head), 3);
        assert_eq!(store.list_len(0), 0);
    }

    #[test]
    fn test_interleaved_lists() {
        let mut store = EdgeStore::new();
        let mut a = 0;
        let mut b = 0;
        a = store.append_record(fwd(10), a);
        b = store.append_record(fwd(20), b);
        a = store.append_record(fwd(11), a);
        b = store.append_record(Handle::reverse(NodeId::from(21)), b);

        let la: Vec<Handle> = store.iter_list(a).map(|(_, t)| t).collect();
        let lb: Vec<Handle> = store.iter_list(b).map(|(_, t)| t).collect();
        assert_eq!(la, vec![fwd(11), fwd(10)]);
        assert_eq!(lb, vec![Handle::reverse(NodeId::from(21)), fwd(20)]);
    }

    #[test]
    fn test_set_target_keeps_links() {
        let mut store = EdgeStore::new();
        let first = store.append_record(fwd(1), 0);
        let head = store.append_record(fwd(2), first);
        store.set_target(first, fwd(9));
        let targets: Vec<Handle> = store.iter_list(head).map(|(_, t)| t).collect();
        assert_eq!(targets, vec![fwd(2), fwd(9)]);
    }
}
