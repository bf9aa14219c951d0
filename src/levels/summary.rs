//! Serializable per-level summary

use serde::{Deserialize, Serialize};

/// Counts and canonical forms for one level
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    /// Level queried
    pub level: usize,
    /// Number of rooted trees
    pub term_count: usize,
    /// Number of unrooted classes
    pub cluster_count: usize,
    /// Node count reported for the level
    pub node_count: usize,
    /// Canonical form of every rooted tree, in generation order
    pub canonical_forms: Vec<String>,
    /// Size of every cluster, ordered by cluster signature
    pub cluster_sizes: Vec<usize>,
}

impl LevelSummary {
    /// Render as pretty JSON for display collaborators
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let summary = LevelSummary {
            level: 1,
            term_count: 1,
            cluster_count: 1,
            node_count: 1,
            canonical_forms: vec!["(())".to_string()],
            cluster_sizes: vec![1],
        };
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"canonical_forms\""));
        let back: LevelSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
