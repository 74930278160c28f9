//! The car's finite set of states.

use std::fmt;

/// Every state the car can be in.
///
/// The set is closed: handlers `match` on it exhaustively, so there is no
/// "unknown state" path to fall into.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarState {
    /// Idle, doors closed, waiting for a call.
    #[default]
    Stop,
    /// Non-stop travel to the floor of the call picked from `Stop`.
    MoveToFloor,
    DoorOpening,
    /// Passengers for this floor are leaving.
    Offload,
    /// Queued passengers in the car's direction are entering.
    Board,
    DoorClosing,
    /// Travel re-evaluated at every floor boundary.
    MoveOneFloor,
}

impl CarState {
    pub const ALL: [CarState; 7] = [
        CarState::Stop,
        CarState::MoveToFloor,
        CarState::DoorOpening,
        CarState::Offload,
        CarState::Board,
        CarState::DoorClosing,
        CarState::MoveOneFloor,
    ];

    /// Short label used in logs and CSV traces.
    pub fn label(self) -> &'static str {
        match self {
            CarState::Stop => "STOP",
            CarState::MoveToFloor => "MVTOFLR",
            CarState::DoorOpening => "OPENDR",
            CarState::Offload => "OFFLD",
            CarState::Board => "BOARD",
            CarState::DoorClosing => "CLOSEDR",
            CarState::MoveOneFloor => "MV1FLR",
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, CarState::MoveToFloor | CarState::MoveOneFloor)
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the doors are in their motion.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DoorPhase {
    pub fn label(self) -> &'static str {
        match self {
            DoorPhase::Closed => "closed",
            DoorPhase::Opening => "opening",
            DoorPhase::Open => "open",
            DoorPhase::Closing => "closing",
        }
    }
}
