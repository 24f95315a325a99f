//! Packed storage layer.
//!
//! Four flat arrays make up a graph: node records, edge-list records, the
//! nucleotide codes and the id → record index. Every cross reference between
//! them is an integer offset with 0 (or an empty interval) as the null value.

pub mod codec;
pub mod edges;
pub mod id_index;
pub mod nodes;
pub mod sequence;

pub use edges::{EdgeListIx, EdgeStore};
pub use id_index::IdIndex;
pub use nodes::{NodeSide, NodeStore, RecordIx};
pub use sequence::SequenceStore;
