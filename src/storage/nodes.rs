//! Node record store.
//!
//! One fixed-size record per node, packed into a single array:
//!
//! ```text
//! Offset  Field
//! 0       id            stable node identifier
//! 1       start_edges   head of the start-side edge list (0 = empty)
//! 2       end_edges     head of the end-side edge list (0 = empty)
//! 3       seq_start     offset of the forward sequence in the sequence store
//! 4       seq_length    length of the forward sequence
//! ```
//!
//! Records are addressed by 0-based rank. Nothing here knows about
//! orientation; the record always describes the forward strand.

use crate::handle::NodeId;
use crate::packed::PackedVec;

use super::edges::EdgeListIx;

pub const NODE_RECORD_SIZE: usize = 5;
const NODE_ID_OFFSET: usize = 0;
const NODE_START_EDGES_OFFSET: usize = 1;
const NODE_END_EDGES_OFFSET: usize = 2;
const NODE_SEQ_START_OFFSET: usize = 3;
const NODE_SEQ_LENGTH_OFFSET: usize = 4;

/// 0-based position of a record in the node store.
pub type RecordIx = usize;

/// Which end of a node an edge list hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSide {
    Start,
    End,
}

impl NodeSide {
    fn offset(self) -> usize {
        match self {
            NodeSide::Start => NODE_START_EDGES_OFFSET,
            NodeSide::End => NODE_END_EDGES_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    records: PackedVec,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        let mut store = Self::new();
        store.records.reserve(nodes * NODE_RECORD_SIZE);
        store
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len() / NODE_RECORD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record with empty edge lists and return its rank.
    pub fn append(&mut self, id: NodeId, seq_start: usize, seq_length: usize) -> RecordIx {
        self.records.push(id.get());
        self.records.push(0);
        self.records.push(0);
        self.records.push(seq_start as u64);
        self.records.push(seq_length as u64);
        self.len() - 1
    }

    fn field(&self, rank: RecordIx, offset: usize) -> u64 {
        self.records.get(rank * NODE_RECORD_SIZE + offset)
    }

    fn set_field(&mut self, rank: RecordIx, offset: usize, value: u64) {
        self.records.set(rank * NODE_RECORD_SIZE + offset, value);
    }

    pub fn id(&self, rank: RecordIx) -> NodeId {
        NodeId::from(self.field(rank, NODE_ID_OFFSET))
    }

    pub fn edges_head(&self, rank: RecordIx, side: NodeSide) -> EdgeListIx {
        self.field(rank, side.offset()) as EdgeListIx
    }

    pub fn set_edges_head(&mut self, rank: RecordIx, side: NodeSide, head: EdgeListIx) {
        self.set_field(rank, side.offset(), head as u64);
    }

    pub fn seq_start(&self, rank: RecordIx) -> usize {
        self.field(rank, NODE_SEQ_START_OFFSET) as usize
    }

    pub fn seq_length(&self, rank: RecordIx) -> usize {
        self.field(rank, NODE_SEQ_LENGTH_OFFSET) as usize
    }

    pub fn set_seq_length(&mut self, rank: RecordIx, length: usize) {
        self.set_field(rank, NODE_SEQ_LENGTH_OFFSET, length as u64);
    }

    /// Exchange the full contents of two records.
    pub fn swap(&mut self, a: RecordIx, b: RecordIx) {
        if a == b {
            return;
        }
        for offset in 0..NODE_RECORD_SIZE {
            self.records
                .swap(a * NODE_RECORD_SIZE + offset, b * NODE_RECORD_SIZE + offset);
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read() {
        let mut store = NodeStore::new();
        let r0 = store.append(NodeId::from(7), 0, 4);
        let r1 = store.append(NodeId::from(3), 4, 10);

        assert_eq!((r0, r1), (0, 1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.id(r1), NodeId::from(3));
        assert_eq!(store.seq_start(r1), 4);
        assert_eq!(store.seq_length(r1), 10);
        assert_eq!(store.edges_head(r0, NodeSide::Start), 0);
        assert_eq!(store.edges_head(r0, NodeSide::End), 0);
    }

    #[test]
    fn test_edge_heads_are_independent() {
        let mut store = NodeStore::new();
        let r = store.append(NodeId::from(1), 0, 1);
        store.set_edges_head(r, NodeSide::End, 12);
        assert_eq!(store.edges_head(r, NodeSide::End), 12);
        assert_eq!(store.edges_head(r, NodeSide::Start), 0);
        store.set_edges_head(r, NodeSide::Start, 5);
        assert_eq!(store.edges_head(r, NodeSide::End), 12);
        assert_eq!(store.edges_head(r, NodeSide::Start), 5);
    }

    #[test]
    fn test_swap_records() {
        let mut store = NodeStore::new();
        let a = store.append(NodeId::from(1), 0, 3);
        let b = store.append(NodeId::from(2), 3, 5);
        store.set_edges_head(a, NodeSide::End, 4);

        store.swap(a, b);

        assert_eq!(store.id(a), NodeId::from(2));
        assert_eq!(store.seq_start(a), 3);
        assert_eq!(store.seq_length(a), 5);
        assert_eq!(store.edges_head(a, NodeSide::End), 0);
        assert_eq!(store.id(b), NodeId::from(1));
        assert_eq!(store.edges_head(b, NodeSide::End), 4);
    }

    #[test]
    fn test_set_seq_length() {
        let mut store = NodeStore::new();
        let r = store.append(NodeId::from(1), 0, 8);
        store.set_seq_length(r, 2);
        assert_eq!(store.seq_length(r), 2);
        assert_eq!(store.seq_start(r), 0);
    }
}
