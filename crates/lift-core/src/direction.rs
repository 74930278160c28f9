//! Travel direction of a call or of the car.

use std::fmt;

/// Direction of travel.
///
/// The car's "no direction" condition only exists while it is stopped and is
/// modelled as `Option<Direction>` at that boundary rather than a third
/// variant here, so every queue lookup is keyed by a real direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Direction of a trip from `origin` to `destination`.
    ///
    /// `Up` when the destination is higher, `Down` otherwise.
    #[inline]
    pub fn of_trip(origin: usize, destination: usize) -> Direction {
        if destination > origin { Direction::Up } else { Direction::Down }
    }

    /// The opposite direction.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The floor one step from `floor` in this direction, or `None` when that
    /// would leave a building of `num_floors` floors.
    #[inline]
    pub fn step(self, floor: usize, num_floors: usize) -> Option<usize> {
        match self {
            Direction::Up if floor + 1 < num_floors => Some(floor + 1),
            Direction::Down if floor > 0 => Some(floor - 1),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("Up"),
            Direction::Down => f.write_str("Down"),
        }
    }
}
