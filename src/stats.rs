//! Size and memory report for a graph.
//!
//! A plain snapshot, cheap to take: every count is either tracked
//! incrementally or read off a store length. Serializes to JSON for the
//! `memory_profile` binary and for callers that log it.

use serde::Serialize;

use crate::handle::NodeId;

/// Footprint of one packed store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Logical entries (records, codes or index slots).
    pub records: usize,
    /// Current bit width of the packed array.
    pub bit_width: u32,
    /// Bytes allocated for the packed words.
    pub heap_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_length: usize,
    pub boundary_count: usize,
    pub min_id: Option<NodeId>,
    pub max_id: Option<NodeId>,
    pub nodes: StoreStats,
    pub edges: StoreStats,
    pub sequence: StoreStats,
    pub id_index: StoreStats,
    pub total_heap_bytes: usize,
}

impl GraphStats {
    /// Packed bytes per stored nucleotide, all stores included.
    pub fn bytes_per_base(&self) -> f64 {
        if self.total_length == 0 {
            return 0.0;
        }
        self.total_heap_bytes as f64 / self.total_length as f64
    }
}
