use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassengerError {
    #[error("arrival parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("group cannot travel from floor {0} to the same floor")]
    SameFloor(usize),

    #[error("group size must be at least 1")]
    EmptyGroup,

    #[error("group of {size} can never fit a car with capacity {capacity}")]
    OversizedGroup { size: u32, capacity: u32 },

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type PassengerResult<T> = Result<T, PassengerError>;
