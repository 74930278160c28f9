//! Structured simulation events.
//!
//! Events carry plain data only.  Turning them into log lines, files, or
//! animation frames is the observer's job.

use lift_car::CarState;
use lift_core::{Direction, GroupId, Tick};
use lift_passengers::PassengerGroup;

/// The identifying fields of a passenger group, copied into events so the
/// group itself never has to leave the queue or car that owns it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupInfo {
    pub id:          GroupId,
    pub size:        u32,
    pub origin:      usize,
    pub destination: usize,
    pub direction:   Direction,
}

impl From<&PassengerGroup> for GroupInfo {
    fn from(g: &PassengerGroup) -> Self {
        Self {
            id:          g.id(),
            size:        g.size(),
            origin:      g.origin(),
            destination: g.destination(),
            direction:   g.direction(),
        }
    }
}

/// Everything the building reports to its observer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingEvent {
    /// Emitted once, on the first tick, with the car's configuration.
    Configured {
        tick:                Tick,
        capacity:            u32,
        ticks_per_floor:     u32,
        ticks_door:          u32,
        passengers_per_tick: u32,
        state:               CarState,
        floor:               usize,
    },

    /// The car's state or floor differs from the start of the tick.
    StateChanged {
        tick:       Tick,
        prev_state: CarState,
        curr_state: CarState,
        prev_floor: usize,
        curr_floor: usize,
    },

    /// A group entered its floor queue and pressed the call button.  Held
    /// groups report this when they leave the backlog.
    CallRegistered { tick: Tick, group: GroupInfo },

    /// A group arrived to a full queue and was turned away.
    Overflowed { tick: Tick, group: GroupInfo },

    /// A group arrived to a full queue and is waiting for room.
    Held { tick: Tick, group: GroupInfo },

    Boarded { tick: Tick, group: GroupInfo },

    Offloaded { tick: Tick, group: GroupInfo },

    /// The group at the front of the queue did not fit; it stays queued.
    SkippedForCapacity { tick: Tick, group: GroupInfo },

    /// A waiting group left its queue after `wait` ticks.
    GaveUp { tick: Tick, group: GroupInfo, wait: u64 },
}

impl BuildingEvent {
    pub fn tick(&self) -> Tick {
        match *self {
            BuildingEvent::Configured { tick, .. }
            | BuildingEvent::StateChanged { tick, .. }
            | BuildingEvent::CallRegistered { tick, .. }
            | BuildingEvent::Overflowed { tick, .. }
            | BuildingEvent::Held { tick, .. }
            | BuildingEvent::Boarded { tick, .. }
            | BuildingEvent::Offloaded { tick, .. }
            | BuildingEvent::SkippedForCapacity { tick, .. }
            | BuildingEvent::GaveUp { tick, .. } => tick,
        }
    }

    /// The group an event is about, if any.
    pub fn group(&self) -> Option<GroupInfo> {
        match *self {
            BuildingEvent::CallRegistered { group, .. }
            | BuildingEvent::Overflowed { group, .. }
            | BuildingEvent::Held { group, .. }
            | BuildingEvent::Boarded { group, .. }
            | BuildingEvent::Offloaded { group, .. }
            | BuildingEvent::SkippedForCapacity { group, .. }
            | BuildingEvent::GaveUp { group, .. } => Some(group),
            BuildingEvent::Configured { .. } | BuildingEvent::StateChanged { .. } => None,
        }
    }
}
