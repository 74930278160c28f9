//! Read-only view of the building handed to renderers after each tick.

use lift_car::{CarState, DoorPhase};
use lift_core::Direction;

/// Group sizes waiting at one floor, front of each queue first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorView {
    pub up:   Vec<u32>,
    pub down: Vec<u32>,
}

/// Enough state to draw the building.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingSnapshot {
    /// Ticks processed so far.
    pub ticks_elapsed: u64,
    pub state:         CarState,
    pub floor:         usize,
    /// `None` while the car is stopped.
    pub heading:       Option<Direction>,
    pub door:          DoorPhase,
    pub aboard:        u32,
    /// Indexed by floor.
    pub floors:        Vec<FloorView>,
}

impl BuildingSnapshot {
    /// People waiting across all floors.
    pub fn waiting(&self) -> u32 {
        self.floors
            .iter()
            .map(|f| f.up.iter().sum::<u32>() + f.down.iter().sum::<u32>())
            .sum()
    }
}
