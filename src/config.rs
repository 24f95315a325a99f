//! Engine configuration.
//!
//! Persisted as pretty JSON (`graph_config.json` by convention). Every
//! field has a default, so a partial file is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Default ceiling on `max_id - min_id + 1`.
pub const DEFAULT_MAX_ID_SPAN: u64 = 1 << 32;

/// Default node count below which parallel iteration runs sequentially.
pub const DEFAULT_PARALLEL_MIN_NODES: usize = 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GraphConfig {
    /// Node records reserved up front.
    pub node_capacity: usize,
    /// Nucleotides reserved up front.
    pub sequence_capacity: usize,
    /// Edge records reserved up front.
    pub edge_capacity: usize,
    /// Below this many nodes `par_for_each_handle` does not fan out.
    pub parallel_min_nodes: usize,
    /// Largest id range the identifier index may cover.
    pub max_id_span: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_capacity: 0,
            sequence_capacity: 0,
            edge_capacity: 0,
            parallel_min_nodes: DEFAULT_PARALLEL_MIN_NODES,
            max_id_span: DEFAULT_MAX_ID_SPAN,
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_id_span == 0 {
            return Err(GraphError::InvalidConfig(
                "max_id_span must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Read config from a JSON file. Returns None if the file doesn't exist.
    pub fn read_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Write config as pretty JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
