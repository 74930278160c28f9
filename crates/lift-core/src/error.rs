//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `LiftError` into them
//! via `From` impls, so configuration failures raised here surface unchanged
//! at the orchestrator boundary.

use thiserror::Error;

use crate::GroupId;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("floor {floor} is outside the building (0..{num_floors})")]
    FloorOutOfRange { floor: usize, num_floors: usize },

    #[error("group {0} is not waiting on any floor")]
    GroupNotWaiting(GroupId),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
