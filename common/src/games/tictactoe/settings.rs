use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_OPTIMAL_PROBABILITY: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveSelectorSettings {
    /// Chance that a turn uses the full search instead of a uniformly random empty cell.
    pub optimal_probability: f64,
}

impl MoveSelectorSettings {
    pub fn always_optimal() -> Self {
        Self {
            optimal_probability: 1.0,
        }
    }
}

impl Default for MoveSelectorSettings {
    fn default() -> Self {
        Self {
            optimal_probability: DEFAULT_OPTIMAL_PROBABILITY,
        }
    }
}

impl Validate for MoveSelectorSettings {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.optimal_probability) {
            return Err(format!(
                "Optimal move probability must be between 0 and 1, got {}",
                self.optimal_probability
            ));
        }
        Ok(())
    }
}
