use lift_core::LiftError;
use lift_passengers::PassengerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("rejected arrival: {0}")]
    Arrival(#[from] PassengerError),
}

pub type SimResult<T> = Result<T, SimError>;
