//! Run configuration.
//!
//! Typically built in code or loaded from a JSON file by the application
//! crate (with the `serde` feature) and handed to `BuildingBuilder`.  Every
//! value is fixed for the lifetime of a run.

use crate::{LiftError, LiftResult};

// ── OverflowPolicy ────────────────────────────────────────────────────────────

/// What happens to an arrival routed to a floor queue that is already full.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Reject the group: it is recorded as overflowed and never served.
    #[default]
    Drop,
    /// Park the group in a per-queue backlog and retry it, in arrival order,
    /// at the start of every later tick until the queue has room.
    Hold,
}

// ── CarConfig ─────────────────────────────────────────────────────────────────

/// Physical parameters of the elevator car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarConfig {
    /// Maximum number of people aboard at once.
    pub capacity: u32,
    /// Ticks to travel between adjacent floors.
    pub ticks_per_floor: u32,
    /// Ticks for the doors to go from fully closed to fully open (or back).
    pub ticks_door: u32,
    /// People that can enter or leave the car per tick.
    pub passengers_per_tick: u32,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            capacity:            15,
            ticks_per_floor:     5,
            ticks_door:          2,
            passengers_per_tick: 3,
        }
    }
}

impl CarConfig {
    /// Reject zero capacities and zero tick rates.
    pub fn validate(&self) -> LiftResult<()> {
        if self.capacity == 0 {
            return Err(LiftError::Config("car capacity must be at least 1".into()));
        }
        if self.ticks_per_floor == 0 {
            return Err(LiftError::Config("ticks_per_floor must be at least 1".into()));
        }
        if self.ticks_door == 0 {
            return Err(LiftError::Config("ticks_door must be at least 1".into()));
        }
        if self.passengers_per_tick == 0 {
            return Err(LiftError::Config("passengers_per_tick must be at least 1".into()));
        }
        Ok(())
    }
}

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Number of floors served.  Floors are numbered `0..num_floors`.
    pub num_floors: usize,

    /// Capacity (in groups) of each per-floor, per-direction queue.
    pub floor_queue_capacity: usize,

    /// The car's physical parameters.
    pub car: CarConfig,

    /// Handling of arrivals routed to a full floor queue.
    pub overflow: OverflowPolicy,

    /// When `false` the building delivers no events to its observer.
    pub events_enabled: bool,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            num_floors:           6,
            floor_queue_capacity: 10,
            car:                  CarConfig::default(),
            overflow:             OverflowPolicy::Drop,
            events_enabled:       true,
        }
    }
}

impl BuildingConfig {
    /// Check every field; the first problem found is returned.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.num_floors
            )));
        }
        if self.floor_queue_capacity == 0 {
            return Err(LiftError::Config("floor_queue_capacity must be at least 1".into()));
        }
        self.car.validate()
    }

    /// `Err(FloorOutOfRange)` unless `floor` is inside the building.
    #[inline]
    pub fn check_floor(&self, floor: usize) -> LiftResult<()> {
        if floor < self.num_floors {
            Ok(())
        } else {
            Err(LiftError::FloorOutOfRange { floor, num_floors: self.num_floors })
        }
    }
}
