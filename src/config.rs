//! Engine configuration

use serde::{Deserialize, Serialize};

/// How the unrooted signature of a tree is computed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureStrategy {
    /// Minimum canonical form over every possible root
    #[default]
    AllRootings,
    /// Minimum canonical form over the one or two centroids only
    Centroid,
}

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest tree size generation will attempt
    pub max_nodes: usize,
    /// Cluster inputs larger than this compute signatures with rayon
    pub parallel_threshold: usize,
    /// Signature used to group trees into clusters
    pub signature: SignatureStrategy,
}

impl EngineConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the node ceiling
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the signature strategy
    pub fn with_signature(mut self, signature: SignatureStrategy) -> Self {
        self.signature = signature;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_nodes: 12,
            parallel_threshold: 64,
            signature: SignatureStrategy::AllRootings,
        }
    }
}
