//! Structural mutation: creation, division, relocation and reorientation.
//!
//! All preconditions are checked before the first store is touched, so a
//! failed call leaves the graph exactly as it was.

use crate::error::{GraphError, Result};
use crate::handle::{Handle, NodeId};
use crate::storage::{EdgeListIx, NodeSide};
use super::engine::{traversal_side, SuccinctGraph};
use super::MutableHandleGraph;

impl SuccinctGraph {
    /// Translate `offsets` to sorted forward offsets, rejecting bad input.
    fn forward_offsets(handle: Handle, offsets: &[usize], length: usize) -> Result<Vec<usize>> {
        let mut forward = Vec::with_capacity(offsets.len());
        for &offset in offsets {
            if offset == 0 || offset >= length {
                return Err(GraphError::InvalidOffset { offset, length });
            }
            forward.push(if handle.is_reverse() { length - offset } else { offset });
        }
        forward.sort_unstable();
        if let Some(pair) = forward.windows(2).find(|pair| pair[0] == pair[1]) {
            let offset = if handle.is_reverse() { length - pair[0] } else { pair[0] };
            return Err(GraphError::DuplicateOffset(offset));
        }
        Ok(forward)
    }

    /// Find the record in `owner`'s `side` list whose target is `target`.
    fn find_in_list(&self, owner: NodeId, side: NodeSide, target: Handle) -> Option<EdgeListIx> {
        let rank = self.id_index.get(owner)?;
        let head = self.nodes.edges_head(rank, side);
        self.edges
            .iter_list(head)
            .find(|&(_, t)| t == target)
            .map(|(ix, _)| ix)
    }

    /// Repoint back-references to `original`'s end onto `last`.
    ///
    /// `last` has just inherited `original`'s end-edge list. Every edge in
    /// it has a partner record that still arrives at `reverse(original)`.
    fn retarget_end_edges(&mut self, original: NodeId, last: Handle) -> Result<()> {
        let last_rank = self.rank(last.id())?;
        let head = self.nodes.edges_head(last_rank, NodeSide::End);
        let stale = Handle::reverse(original);

        let mut rewrites = Vec::new();
        for (ix, target) in self.edges.iter_list(head) {
            if target == stale {
                // reversing self edge on the old end, stored once
                rewrites.push(ix);
            } else if let Some(partner) =
                self.find_in_list(target.id(), traversal_side(target, true), stale)
            {
                rewrites.push(partner);
            }
        }
        for ix in rewrites {
            self.edges.set_target(ix, last.flip());
        }
        Ok(())
    }
}

impl MutableHandleGraph for SuccinctGraph {
    fn create_handle(&mut self, sequence: &[u8]) -> Result<Handle> {
        let id = self.next_id();
        self.create_node(sequence, id)
    }

    fn create_handle_with_id(&mut self, sequence: &[u8], id: NodeId) -> Result<Handle> {
        let handle = self.create_node(sequence, id)?;
        tracing::debug!("created node {} ({} bp)", id, sequence.len());
        Ok(handle)
    }

    fn create_edge(&mut self, left: Handle, right: Handle) -> Result<()> {
        self.link(left, right)
    }

    fn swap_handles(&mut self, a: Handle, b: Handle) -> Result<()> {
        let rank_a = self.rank(a.id())?;
        let rank_b = self.rank(b.id())?;
        if rank_a == rank_b {
            return Ok(());
        }
        self.nodes.swap(rank_a, rank_b);
        self.id_index.set(a.id(), rank_b);
        self.id_index.set(b.id(), rank_a);
        tracing::debug!("swapped records of {} and {}", a.id(), b.id());
        Ok(())
    }

    fn apply_orientation(&mut self, handle: Handle) -> Result<Handle> {
        let rank = self.rank(handle.id())?;
        if !handle.is_reverse() {
            return Ok(handle);
        }
        let id = handle.id();
        let start = self.nodes.seq_start(rank);
        let length = self.nodes.seq_length(rank);

        // the old start list now serves the new end and vice versa
        let start_head = self.nodes.edges_head(rank, NodeSide::Start);
        let end_head = self.nodes.edges_head(rank, NodeSide::End);
        self.nodes.set_edges_head(rank, NodeSide::Start, end_head);
        self.nodes.set_edges_head(rank, NodeSide::End, start_head);

        // every stored handle naming this node flips; collect first so
        // no record is flipped twice
        let mut flips = Vec::new();
        for (side, head) in [(NodeSide::End, start_head), (NodeSide::Start, end_head)] {
            // partner records were written as the flip of the old handle
            // on this side, in old encoding
            let partner_value = match side {
                NodeSide::End => Handle::forward(id),
                NodeSide::Start => Handle::reverse(id),
            };
            for (ix, target) in self.edges.iter_list(head) {
                if target.id() == id {
                    flips.push(ix);
                } else if let Some(partner) =
                    self.find_in_list(target.id(), traversal_side(target, true), partner_value)
                {
                    flips.push(partner);
                }
            }
        }
        for ix in flips {
            let target = self.edges.get_target(ix);
            self.edges.set_target(ix, target.flip());
        }

        self.sequences.reverse_complement_in_place(start, length);
        tracing::debug!("applied reverse orientation to node {}", id);
        Ok(handle.flip())
    }

    fn divide_handle(&mut self, handle: Handle, offsets: &[usize]) -> Result<Vec<Handle>> {
        let rank = self.rank(handle.id())?;
        let length = self.nodes.seq_length(rank);
        let forward_offsets = Self::forward_offsets(handle, offsets, length)?;
        if forward_offsets.is_empty() {
            return Ok(vec![handle]);
        }

        let first_new = self.next_id();
        let last_new = NodeId::from(first_new.get().saturating_add(forward_offsets.len() as u64 - 1));
        self.check_new_id(last_new)?;

        let original = handle.id();
        let seq_start = self.nodes.seq_start(rank);
        let end_head = self.nodes.edges_head(rank, NodeSide::End);
        self.nodes.set_edges_head(rank, NodeSide::End, 0);

        let mut pieces = vec![Handle::forward(original)];
        let mut prev = Handle::forward(original);
        let mut prev_rank = rank;
        let mut last_offset = 0;
        for (i, &offset) in forward_offsets.iter().enumerate() {
            self.nodes.set_seq_length(prev_rank, offset - last_offset);

            let id = NodeId::from(first_new.get() + i as u64);
            // length is fixed up on the next iteration or after the loop
            let piece_rank = self.push_record(id, seq_start + offset, 0);
            self.sequences.mark_boundary(seq_start + offset);
            let piece = Handle::forward(id);

            self.prepend_edge(prev_rank, NodeSide::End, piece);
            self.prepend_edge(piece_rank, NodeSide::Start, prev.flip());
            self.edge_count += 1;

            pieces.push(piece);
            prev = piece;
            prev_rank = piece_rank;
            last_offset = offset;
        }
        self.nodes.set_seq_length(prev_rank, length - last_offset);
        self.nodes.set_edges_head(prev_rank, NodeSide::End, end_head);
        self.retarget_end_edges(original, prev)?;

        tracing::debug!("divided node {} into {} pieces", original, pieces.len());

        if handle.is_reverse() {
            pieces.reverse();
            for piece in pieces.iter_mut() {
                *piece = piece.flip();
            }
        }
        Ok(pieces)
    }

    fn destroy_handle(&mut self, handle: Handle) -> Result<()> {
        self.rank(handle.id())?;
        tracing::warn!("destroy_handle({}) ignored: node deletion is not supported", handle);
        Ok(())
    }

    fn destroy_edge(&mut self, left: Handle, right: Handle) -> Result<()> {
        self.rank(left.id())?;
        self.rank(right.id())?;
        tracing::warn!(
            "destroy_edge({}, {}) ignored: edge deletion is not supported",
            left,
            right
        );
        Ok(())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.sequences.clear();
        self.id_index.clear();
        self.edge_count = 0;
        self.total_length = 0;
        tracing::debug!("graph cleared");
    }
}
