//! Planner configuration.

use serde::{Deserialize, Serialize};

/// Settings that shape planner output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Unit label appended to distances in messages.
    pub unit: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unit: "km".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Formats a distance with the configured unit.
    pub fn format_distance(&self, distance: u64) -> String {
        format!("{}{}", distance, self.unit)
    }
}
