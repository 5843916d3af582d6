//! Navigator configuration: element wait budget and path selection.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tie-break among equally short paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathPolicy {
    /// Forward edges in registration order, then the back action.
    #[default]
    RegistrationOrder,
    /// Candidate order shuffled per scene with a seeded RNG.
    Seeded { seed: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// How long a checked edge waits for its element (default: 5 s).
    pub existence_timeout_ms: u64,
    /// Longest edge sequence the planner will consider.
    pub max_path_len: usize,
    pub policy: PathPolicy,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            existence_timeout_ms: 5_000,
            max_path_len: 64,
            policy: PathPolicy::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn existence_timeout(&self) -> Duration {
        Duration::from_millis(self.existence_timeout_ms)
    }
}
