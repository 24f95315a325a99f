//! Node identifiers, oriented handles and edges.
//!
//! A `Handle` packs a stable node identifier and an orientation bit into a
//! single integer: `(id << 1) | is_reverse`. It never encodes where the
//! node's record physically lives, so handles survive record relocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Largest id whose handle (`id << 1 | 1`) still fits in a u64.
pub const MAX_NODE_ID: u64 = u64::MAX >> 1;

/// Stable, externally visible node identity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An oriented reference to a node.
///
/// Two handles are equal iff both identifier and orientation match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(u64);

impl Handle {
    /// Build a handle from an identifier and orientation.
    ///
    /// # Panics
    ///
    /// Panics if `id` is above [`MAX_NODE_ID`]; the shift would drop its
    /// top bit and name a different node. Use [`Handle::try_pack`] for
    /// untrusted ids.
    pub fn pack(id: NodeId, is_reverse: bool) -> Self {
        assert!(
            id.get() <= MAX_NODE_ID,
            "node id {} cannot be encoded in a handle",
            id
        );
        Self((id.get() << 1) | is_reverse as u64)
    }

    /// Checked [`Handle::pack`]: `InvalidNodeId` for ids above [`MAX_NODE_ID`].
    pub fn try_pack(id: NodeId, is_reverse: bool) -> Result<Self> {
        if id.get() > MAX_NODE_ID {
            return Err(GraphError::InvalidNodeId(id));
        }
        Ok(Self((id.get() << 1) | is_reverse as u64))
    }

    pub fn forward(id: NodeId) -> Self {
        Self::pack(id, false)
    }

    pub fn reverse(id: NodeId) -> Self {
        Self::pack(id, true)
    }

    /// Reinterpret a raw integer produced by [`Handle::as_integer`].
    pub const fn from_integer(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_integer(self) -> u64 {
        self.0
    }

    pub const fn id(self) -> NodeId {
        NodeId(self.0 >> 1)
    }

    pub const fn is_reverse(self) -> bool {
        self.0 & 1 != 0
    }

    /// Same node, opposite orientation.
    pub const fn flip(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.id(), if self.is_reverse() { '-' } else { '+' })
    }
}

/// A directed view of an undirected edge: leaving `left`, arriving at `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub left: Handle,
    pub right: Handle,
}

impl Edge {
    pub fn new(left: Handle, right: Handle) -> Self {
        Self { left, right }
    }

    /// The same edge traversed in the opposite direction.
    pub fn flip(self) -> Self {
        Self {
            left: self.right.flip(),
            right: self.left.flip(),
        }
    }
}
