//! Construction options for learned models

use serde::{Deserialize, Serialize};

/// Configuration for [`RLModel`](crate::RLModel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RLModelConfig {
    /// Seed for the sampling generator; drawn from OS entropy when absent
    pub seed: Option<u64>,
    /// Normalize the experience right away instead of starting from self-loops
    pub sync_on_construction: bool,
}

impl Default for RLModelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sync_on_construction: true,
        }
    }
}

impl RLModelConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> mdp_core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
