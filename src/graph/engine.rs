//! SuccinctGraph: the packed graph engine.
//!
//! Composes the node, edge, sequence and id stores. Edges name their
//! endpoints by handle (id + orientation), never by record rank, so
//! records can move without touching any edge list.
//!
//! Edge-list sides: leaving a forward handle to the right (or a reverse
//! handle to the left) walks the node's end list; the other two walk its
//! start list. Stored targets always mean "where you arrive when leaving
//! through the end list", so walking leftward flips them.

use rayon::prelude::*;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::handle::{Edge, Handle, NodeId, MAX_NODE_ID};
use crate::stats::{GraphStats, StoreStats};
use crate::storage::codec;
use crate::storage::{EdgeStore, IdIndex, NodeSide, NodeStore, RecordIx, SequenceStore};
use super::HandleGraph;

/// Edge list walked when leaving `handle` in the given direction.
pub(crate) fn traversal_side(handle: Handle, go_left: bool) -> NodeSide {
    if handle.is_reverse() != go_left {
        NodeSide::Start
    } else {
        NodeSide::End
    }
}

/// Mutable, succinct bidirected sequence graph.
pub struct SuccinctGraph {
    pub(crate) nodes: NodeStore,
    pub(crate) edges: EdgeStore,
    pub(crate) sequences: SequenceStore,
    pub(crate) id_index: IdIndex,
    /// Distinct edges (a reversing self edge is one record, still one edge).
    pub(crate) edge_count: usize,
    pub(crate) total_length: usize,
    pub(crate) config: GraphConfig,
}

// ── Constructors ────────────────────────────────────────────────────

impl SuccinctGraph {
    pub fn new() -> Self {
        Self::from_valid_config(GraphConfig::default())
    }

    /// Create an engine, reserving the capacities named in `config`.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GraphConfig) -> Self {
        Self {
            nodes: NodeStore::with_capacity(config.node_capacity),
            edges: EdgeStore::with_capacity(config.edge_capacity),
            sequences: SequenceStore::with_capacity(config.sequence_capacity),
            id_index: IdIndex::new(),
            edge_count: 0,
            total_length: 0,
            config,
        }
    }

    /// Size and memory report for every store.
    pub fn stats(&self) -> GraphStats {
        let nodes = StoreStats {
            records: self.nodes.len(),
            bit_width: self.nodes.width(),
            heap_bytes: self.nodes.heap_bytes(),
        };
        let edges = StoreStats {
            records: self.edges.len(),
            bit_width: self.edges.width(),
            heap_bytes: self.edges.heap_bytes(),
        };
        let sequence = StoreStats {
            records: self.sequences.len(),
            bit_width: self.sequences.width(),
            heap_bytes: self.sequences.heap_bytes(),
        };
        let id_index = StoreStats {
            records: self.id_index.span(),
            bit_width: self.id_index.width(),
            heap_bytes: self.id_index.heap_bytes(),
        };
        GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edge_count,
            total_length: self.total_length,
            boundary_count: self.sequences.boundary_count(),
            min_id: self.id_index.min_id(),
            max_id: self.id_index.max_id(),
            total_heap_bytes: nodes.heap_bytes
                + edges.heap_bytes
                + sequence.heap_bytes
                + id_index.heap_bytes,
            nodes,
            edges,
            sequence,
            id_index,
        }
    }
}

impl Default for SuccinctGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ── Internals ───────────────────────────────────────────────────────

impl SuccinctGraph {
    /// Record rank for a live node, or `NodeNotFound`.
    pub(crate) fn rank(&self, id: NodeId) -> Result<RecordIx> {
        self.id_index.get(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Next id handed out by creation and division.
    pub(crate) fn next_id(&self) -> NodeId {
        match self.id_index.max_id() {
            Some(max) => NodeId::from(max.get().saturating_add(1)),
            None => NodeId::from(1),
        }
    }

    /// Fail unless `id` can be indexed within the configured span.
    pub(crate) fn check_new_id(&self, id: NodeId) -> Result<()> {
        if id.get() > MAX_NODE_ID {
            return Err(GraphError::InvalidNodeId(id));
        }
        let span = self.id_index.span_with(id);
        if span > self.config.max_id_span {
            return Err(GraphError::IdSpanExceeded {
                span,
                limit: self.config.max_id_span,
            });
        }
        Ok(())
    }

    /// Append a node record and index it. `id` must have passed `check_new_id`.
    pub(crate) fn push_record(&mut self, id: NodeId, seq_start: usize, seq_length: usize) -> RecordIx {
        let rank = self.nodes.append(id, seq_start, seq_length);
        self.id_index.ensure_range(id);
        self.id_index.set(id, rank);
        rank
    }

    /// Prepend a record onto one of a node's edge lists.
    pub(crate) fn prepend_edge(&mut self, rank: RecordIx, side: NodeSide, target: Handle) {
        let head = self.nodes.edges_head(rank, side);
        let ix = self.edges.append_record(target, head);
        self.nodes.set_edges_head(rank, side, ix);
    }

    /// Walk one edge list of an already resolved record.
    fn follow_rank<F>(&self, rank: RecordIx, handle: Handle, go_left: bool, mut visit: F) -> bool
    where
        F: FnMut(Handle) -> bool,
    {
        let head = self.nodes.edges_head(rank, traversal_side(handle, go_left));
        for (_, target) in self.edges.iter_list(head) {
            let next = if go_left { target.flip() } else { target };
            if !visit(next) {
                return false;
            }
        }
        true
    }

    fn check_index(index: usize, length: usize) -> Result<()> {
        if index >= length {
            return Err(GraphError::OutOfRange { index, length });
        }
        Ok(())
    }
}

// ── HandleGraph ─────────────────────────────────────────────────────

impl HandleGraph for SuccinctGraph {
    fn has_node(&self, id: NodeId) -> bool {
        self.id_index.get(id).is_some()
    }

    fn get_length(&self, handle: Handle) -> Result<usize> {
        let rank = self.rank(handle.id())?;
        Ok(self.nodes.seq_length(rank))
    }

    fn get_sequence(&self, handle: Handle) -> Result<Vec<u8>> {
        let rank = self.rank(handle.id())?;
        let start = self.nodes.seq_start(rank);
        let length = self.nodes.seq_length(rank);
        if handle.is_reverse() {
            Ok(self.sequences.decode_reverse_complement(start, length))
        } else {
            Ok(self.sequences.decode(start, length))
        }
    }

    fn get_base(&self, handle: Handle, index: usize) -> Result<u8> {
        let rank = self.rank(handle.id())?;
        let start = self.nodes.seq_start(rank);
        let length = self.nodes.seq_length(rank);
        Self::check_index(index, length)?;
        if handle.is_reverse() {
            let code = self.sequences.get(start + length - 1 - index);
            Ok(codec::decode(codec::complement(code)))
        } else {
            Ok(codec::decode(self.sequences.get(start + index)))
        }
    }

    fn get_subsequence(&self, handle: Handle, index: usize, size: usize) -> Result<Vec<u8>> {
        let rank = self.rank(handle.id())?;
        let start = self.nodes.seq_start(rank);
        let length = self.nodes.seq_length(rank);
        if index > length {
            return Err(GraphError::OutOfRange { index, length });
        }
        let end = index.saturating_add(size).min(length);
        if handle.is_reverse() {
            Ok(self
                .sequences
                .decode_reverse_complement(start + length - end, end - index))
        } else {
            Ok(self.sequences.decode(start + index, end - index))
        }
    }

    fn follow_edges<F>(&self, handle: Handle, go_left: bool, visit: F) -> Result<bool>
    where
        F: FnMut(Handle) -> bool,
    {
        let rank = self.rank(handle.id())?;
        Ok(self.follow_rank(rank, handle, go_left, visit))
    }

    fn get_degree(&self, handle: Handle, go_left: bool) -> Result<usize> {
        let rank = self.rank(handle.id())?;
        let head = self.nodes.edges_head(rank, traversal_side(handle, go_left));
        Ok(self.edges.list_len(head))
    }

    fn for_each_handle<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(Handle) -> bool,
    {
        for rank in 0..self.nodes.len() {
            if !visit(Handle::forward(self.nodes.id(rank))) {
                return false;
            }
        }
        true
    }

    fn par_for_each_handle<F>(&self, visit: F)
    where
        F: Fn(Handle) + Sync + Send,
    {
        let count = self.nodes.len();
        if count < self.config.parallel_min_nodes {
            for rank in 0..count {
                visit(Handle::forward(self.nodes.id(rank)));
            }
            return;
        }
        (0..count)
            .into_par_iter()
            .for_each(|rank| visit(Handle::forward(self.nodes.id(rank))));
    }

    fn for_each_edge<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(Edge) -> bool,
    {
        for rank in 0..self.nodes.len() {
            let handle = Handle::forward(self.nodes.id(rank));
            let id = handle.id();

            let keep_going = self.follow_rank(rank, handle, false, |next| {
                if id <= next.id() {
                    return visit(Edge::new(handle, next));
                }
                true
            });
            if !keep_going {
                return false;
            }

            let keep_going = self.follow_rank(rank, handle, true, |prev| {
                // a reversing start-side self edge lives only in this list
                if id < prev.id() || (id == prev.id() && prev.is_reverse()) {
                    return visit(Edge::new(prev, handle));
                }
                true
            });
            if !keep_going {
                return false;
            }
        }
        true
    }

    fn node_size(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn total_length(&self) -> usize {
        self.total_length
    }

    fn min_node_id(&self) -> NodeId {
        self.id_index.min_id().unwrap_or_default()
    }

    fn max_node_id(&self) -> NodeId {
        self.id_index.max_id().unwrap_or_default()
    }
}

// ── Creation ────────────────────────────────────────────────────────

impl SuccinctGraph {
    pub(crate) fn create_node(&mut self, sequence: &[u8], id: NodeId) -> Result<Handle> {
        if self.has_node(id) {
            return Err(GraphError::DuplicateNodeId(id));
        }
        self.check_new_id(id)?;

        let seq_start = self.sequences.append_sequence(sequence);
        self.push_record(id, seq_start, sequence.len());
        self.total_length += sequence.len();
        Ok(Handle::forward(id))
    }

    pub(crate) fn link(&mut self, left: Handle, right: Handle) -> Result<()> {
        let left_rank = self.rank(left.id())?;
        let right_rank = self.rank(right.id())?;

        if !self.follow_rank(left_rank, left, false, |next| next != right) {
            return Ok(());
        }

        let left_side = traversal_side(left, false);
        let right_side = traversal_side(right, true);

        self.prepend_edge(left_rank, left_side, right);
        self.edge_count += 1;

        if left_rank == right_rank && left_side == right_side {
            // reversing self edge: both directions share one list
            tracing::trace!("reversing self edge {} -> {}", left, right);
            return Ok(());
        }
        self.prepend_edge(right_rank, right_side, left.flip());
        tracing::trace!("edge {} -> {}", left, right);
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
