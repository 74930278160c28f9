//! Plain data row types written by output backends.

use lift_sim::{BuildingSnapshot, PassengerRecord, RecordOutcome};

/// One delivered or abandoned group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerRow {
    pub id:            u32,
    pub size:          u32,
    /// 1-based origin floor.
    pub from:          usize,
    /// 1-based destination floor.
    pub to:            usize,
    /// Ticks waited before boarding, or before giving up.
    pub wait_to_board: u64,
    /// Ticks from arrival to destination; `-1` for a group that gave up.
    pub total_time:    i64,
}

impl From<&PassengerRecord> for PassengerRow {
    fn from(r: &PassengerRecord) -> Self {
        let (wait_to_board, total_time) = match r.outcome {
            RecordOutcome::Delivered { wait_to_board, total_time } => {
                (wait_to_board, i64::try_from(total_time).unwrap_or(i64::MAX))
            }
            RecordOutcome::GaveUp { wait } => (wait, -1),
        };
        Self {
            id: r.id.0,
            size: r.size,
            from: r.origin + 1,
            to: r.destination + 1,
            wait_to_board,
            total_time,
        }
    }
}

/// The car and the lobby at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarTraceRow {
    /// The tick this row describes.
    pub tick:    u64,
    /// 1-based floor.
    pub floor:   usize,
    pub state:   &'static str,
    /// `"Up"`, `"Down"`, or `""` while stopped.
    pub heading: &'static str,
    pub door:    &'static str,
    pub aboard:  u32,
    pub waiting: u32,
}

impl From<&BuildingSnapshot> for CarTraceRow {
    fn from(s: &BuildingSnapshot) -> Self {
        Self {
            tick:    s.ticks_elapsed.saturating_sub(1),
            floor:   s.floor + 1,
            state:   s.state.label(),
            heading: match s.heading {
                Some(lift_core::Direction::Up) => "Up",
                Some(lift_core::Direction::Down) => "Down",
                None => "",
            },
            door:    s.door.label(),
            aboard:  s.aboard,
            waiting: s.waiting(),
        }
    }
}
