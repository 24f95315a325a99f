//! Error types for the graph engine

use thiserror::Error;

use crate::handle::NodeId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node {0} already exists")]
    DuplicateNodeId(NodeId),

    #[error("Node id {0} cannot be encoded in a handle")]
    InvalidNodeId(NodeId),

    #[error("Id range of {span} would exceed the configured limit of {limit}")]
    IdSpanExceeded { span: u64, limit: u64 },

    #[error("Offset {offset} is not strictly inside a node of length {length}")]
    InvalidOffset { offset: usize, length: usize },

    #[error("Offset {0} given more than once")]
    DuplicateOffset(usize),

    #[error("Index {index} out of range for a node of length {length}")]
    OutOfRange { index: usize, length: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Stable error code for callers that surface failures to users
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::NodeNotFound(_) => "NODE_NOT_FOUND",
            GraphError::DuplicateNodeId(_) => "DUPLICATE_NODE_ID",
            GraphError::InvalidNodeId(_) => "INVALID_NODE_ID",
            GraphError::IdSpanExceeded { .. } => "ID_SPAN_EXCEEDED",
            GraphError::InvalidOffset { .. } => "INVALID_OFFSET",
            GraphError::DuplicateOffset(_) => "DUPLICATE_OFFSET",
            GraphError::OutOfRange { .. } => "OUT_OF_RANGE",
            GraphError::InvalidConfig(_) => "INVALID_CONFIG",
            _ => "INTERNAL_ERROR",
        }
    }
}
