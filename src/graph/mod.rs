//! Handle graph API and its succinct implementation

pub mod engine;
pub mod mutation;

pub use engine::SuccinctGraph;

use crate::error::{GraphError, Result};
use crate::handle::{Edge, Handle, NodeId};

/// Read access to a bidirected sequence graph.
///
/// Handles name a node plus an orientation. Resolving a handle whose
/// node is not live fails with `GraphError::NodeNotFound`.
pub trait HandleGraph {
    // === HANDLES ===

    /// Handle for a node id in the given orientation. Pure, O(1).
    ///
    /// # Panics
    ///
    /// Panics if `id` exceeds `MAX_NODE_ID`; see [`HandleGraph::try_get_handle`].
    fn get_handle(&self, id: NodeId, is_reverse: bool) -> Handle {
        Handle::pack(id, is_reverse)
    }

    /// Checked [`HandleGraph::get_handle`]: `InvalidNodeId` instead of a panic
    /// for ids too large to encode. Does not check that the node is live.
    fn try_get_handle(&self, id: NodeId, is_reverse: bool) -> Result<Handle> {
        Handle::try_pack(id, is_reverse)
    }

    fn get_id(&self, handle: Handle) -> NodeId {
        handle.id()
    }

    fn get_is_reverse(&self, handle: Handle) -> bool {
        handle.is_reverse()
    }

    fn flip(&self, handle: Handle) -> Handle {
        handle.flip()
    }

    /// Whether a live node carries this id
    fn has_node(&self, id: NodeId) -> bool;

    // === SEQUENCE ===

    fn get_length(&self, handle: Handle) -> Result<usize>;

    /// Sequence in the handle's orientation (reverse complement when reverse)
    fn get_sequence(&self, handle: Handle) -> Result<Vec<u8>>;

    /// Base at `index`, counted in the handle's orientation
    fn get_base(&self, handle: Handle, index: usize) -> Result<u8>;

    /// Up to `size` bases starting at `index` in the handle's orientation,
    /// clamped at the end of the node
    fn get_subsequence(&self, handle: Handle, index: usize, size: usize) -> Result<Vec<u8>>;

    // === TRAVERSAL ===

    /// Visit the neighbors on one side of `handle`.
    ///
    /// `go_left = false` visits handles reached by leaving `handle` through
    /// its end, `go_left = true` those that lead into its start. Stops as
    /// soon as `visit` returns false; returns false iff it stopped early.
    fn follow_edges<F>(&self, handle: Handle, go_left: bool, visit: F) -> Result<bool>
    where
        F: FnMut(Handle) -> bool;

    /// Visit the forward handle of every node in storage order, stopping
    /// early when `visit` returns false.
    fn for_each_handle<F>(&self, visit: F) -> bool
    where
        F: FnMut(Handle) -> bool;

    /// Visit every node concurrently, in no particular order.
    ///
    /// `visit` must not mutate the graph; nothing is synchronized between
    /// calls.
    fn par_for_each_handle<F>(&self, visit: F)
    where
        F: Fn(Handle) + Sync + Send;

    /// Visit every edge exactly once, stopping early when `visit` returns false
    fn for_each_edge<F>(&self, visit: F) -> bool
    where
        F: FnMut(Edge) -> bool;

    /// Number of edges on one side of `handle`
    fn get_degree(&self, handle: Handle, go_left: bool) -> Result<usize> {
        let mut degree = 0;
        self.follow_edges(handle, go_left, |_| {
            degree += 1;
            true
        })?;
        Ok(degree)
    }

    /// Whether leaving `left` through its end can arrive at `right`. O(degree).
    fn has_edge(&self, left: Handle, right: Handle) -> Result<bool> {
        if !self.has_node(right.id()) {
            return Err(GraphError::NodeNotFound(right.id()));
        }
        let missing = self.follow_edges(left, false, |next| next != right)?;
        Ok(!missing)
    }

    /// Forward handles of all nodes in storage order
    fn handles(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.node_size());
        self.for_each_handle(|h| {
            handles.push(h);
            true
        });
        handles
    }

    // === STATS ===

    /// Number of live node records
    fn node_size(&self) -> usize;

    /// Number of distinct edges
    fn edge_count(&self) -> usize;

    /// Sum of all node lengths
    fn total_length(&self) -> usize;

    /// Smallest id ever indexed (0 when empty)
    fn min_node_id(&self) -> NodeId;

    /// Largest id ever indexed (0 when empty)
    fn max_node_id(&self) -> NodeId;
}

/// Structural mutation of a handle graph.
///
/// Single writer: every method takes `&mut self`. The engine holds no
/// locks, so sharing one across threads for writing needs outside
/// synchronization.
pub trait MutableHandleGraph: HandleGraph {
    /// Create a node with the next unused id (`max_node_id() + 1`).
    fn create_handle(&mut self, sequence: &[u8]) -> Result<Handle>;

    /// Create a node with an explicit id. Rejects ids already live.
    fn create_handle_with_id(&mut self, sequence: &[u8], id: NodeId) -> Result<Handle>;

    /// Join the end of `left` to the start of `right`. No-op if present.
    fn create_edge(&mut self, left: Handle, right: Handle) -> Result<()>;

    /// Exchange the storage slots of two nodes. Observationally transparent.
    fn swap_handles(&mut self, a: Handle, b: Handle) -> Result<()>;

    /// Make `handle`'s orientation the node's forward orientation.
    ///
    /// Returns the handle that now names the same strand as forward.
    fn apply_orientation(&mut self, handle: Handle) -> Result<Handle>;

    /// Split a node at `offsets` (in `handle`'s orientation).
    ///
    /// Returns `offsets.len() + 1` handles, ordered and oriented so that
    /// their sequences concatenate to `get_sequence(handle)`.
    fn divide_handle(&mut self, handle: Handle, offsets: &[usize]) -> Result<Vec<Handle>>;

    /// Node deletion is not supported: validates `handle` and leaves the graph unchanged.
    fn destroy_handle(&mut self, handle: Handle) -> Result<()>;

    /// Edge deletion is not supported: validates both handles and leaves the graph unchanged.
    fn destroy_edge(&mut self, left: Handle, right: Handle) -> Result<()>;

    /// Drop every node, edge and sequence.
    fn clear(&mut self);
}
