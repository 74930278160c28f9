//! Passenger outcome records exposed for export at the end of a run.

use lift_core::{Direction, GroupId, Tick};
use lift_passengers::PassengerGroup;

/// A group that left its queue before boarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbandonedGroup {
    pub group:      PassengerGroup,
    pub gave_up_at: Tick,
}

impl AbandonedGroup {
    /// Ticks spent waiting before giving up.
    pub fn wait(&self) -> u64 {
        self.gave_up_at.since(self.group.arrival_tick())
    }
}

/// How a group's trip ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordOutcome {
    Delivered { wait_to_board: u64, total_time: u64 },
    GaveUp { wait: u64 },
}

/// One exported row: a delivered or abandoned group.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerRecord {
    pub id:          GroupId,
    pub size:        u32,
    pub origin:      usize,
    pub destination: usize,
    pub direction:   Direction,
    pub arrival:     Tick,
    pub outcome:     RecordOutcome,
}

impl PassengerRecord {
    /// Record for a group that reached its destination.
    ///
    /// `None` if the group was never offloaded.
    pub fn delivered(group: &PassengerGroup) -> Option<Self> {
        Some(Self::with_outcome(group, RecordOutcome::Delivered {
            wait_to_board: group.wait_to_board()?,
            total_time:    group.trip_time()?,
        }))
    }

    pub fn gave_up(abandoned: &AbandonedGroup) -> Self {
        Self::with_outcome(&abandoned.group, RecordOutcome::GaveUp { wait: abandoned.wait() })
    }

    fn with_outcome(group: &PassengerGroup, outcome: RecordOutcome) -> Self {
        Self {
            id:          group.id(),
            size:        group.size(),
            origin:      group.origin(),
            destination: group.destination(),
            direction:   group.direction(),
            arrival:     group.arrival_tick(),
            outcome,
        }
    }
}
