use std::default::Default;
use serde::{Deserialize, Serialize};
use super::error::*;

pub const DEFAULT_MAX_REPLICAS: usize = 100;
pub const DEFAULT_MAX_WEIGHT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// virtual nodes given by `add`, and the upper bound for every node
	pub max_replicas: usize,
	/// weight that maps to `max_replicas` in `add_with_weight`
	pub max_weight: i64
}

impl Config {
	pub fn new(max_replicas: usize, max_weight: i64) -> Self {
		Config {
			max_replicas,
			max_weight
		}
	}

	pub fn validate(&self) -> RingResult<()> {
		if self.max_replicas == 0 {
			return Err(RingError::InvalidConfig("max_replicas must be at least 1".to_string()));
		}
		if self.max_weight <= 0 {
			return Err(RingError::InvalidConfig(format!(
				"max_weight must be positive, got {}",
				self.max_weight
			)));
		}
		Ok(())
	}

	/// Replica count for a weight, scaled against `max_weight` and rounded down.
	/// Weights above `max_weight` are capped at `max_replicas`.
	pub fn replicas_for_weight(&self, weight: i64) -> RingResult<usize> {
		if weight < 0 {
			return Err(RingError::NegativeWeight(weight));
		}
		// i128 keeps max_replicas * weight from overflowing
		let scaled = self.max_replicas as i128 * weight as i128 / self.max_weight as i128;
		Ok(scaled.min(self.max_replicas as i128) as usize)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_replicas: DEFAULT_MAX_REPLICAS,
			max_weight: DEFAULT_MAX_WEIGHT
		}
	}
}
