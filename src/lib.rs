//! dgraph: a succinct, mutable, bidirected sequence graph.
//!
//! Nodes carry DNA sequences and are addressed through [`Handle`]s, a node
//! id plus an orientation. Every store is a bit-packed array whose width
//! grows with the largest value written, so a graph costs a few bytes per
//! node and edge and three bits per base.
//!
//! ```
//! use dgraph::{HandleGraph, MutableHandleGraph, SuccinctGraph};
//!
//! # fn main() -> dgraph::Result<()> {
//! let mut graph = SuccinctGraph::new();
//! let a = graph.create_handle(b"ACGT")?;
//! let b = graph.create_handle(b"GTCA")?;
//! graph.create_edge(a, b)?;
//! assert!(graph.has_edge(a, b)?);
//! assert_eq!(graph.get_sequence(b.flip())?, b"TGAC");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod handle;
pub mod logging;
pub mod packed;
pub mod stats;
pub mod storage;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{HandleGraph, MutableHandleGraph, SuccinctGraph};
pub use handle::{Edge, Handle, NodeId, MAX_NODE_ID};
pub use logging::init_logging;
pub use stats::{GraphStats, StoreStats};
