use thiserror::Error;
use std::result::Result;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
	#[error("Negative weight {0}")]
	NegativeWeight(i64),
	#[error("Invalid config: {0}")]
	InvalidConfig(String)
}

pub type RingResult<T> = Result<T, RingError>;
