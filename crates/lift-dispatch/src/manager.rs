//! The `CallManager` call-presence table and its dispatch queries.

use lift_core::Direction;
use lift_passengers::FloorQueue;

/// A pending call the car has been told to serve.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Call {
    pub floor:     usize,
    pub direction: Direction,
}

/// Per-floor, per-direction call presence derived from the floor queues.
#[derive(Clone, Debug, Default)]
pub struct CallManager {
    up:       Vec<bool>,
    down:     Vec<bool>,
    any_up:   bool,
    any_down: bool,
}

impl CallManager {
    /// Build the table from the current queue contents.
    pub fn scan(floors: &[FloorQueue]) -> Self {
        let up: Vec<bool> = floors.iter().map(|f| !f.is_empty(Direction::Up)).collect();
        let down: Vec<bool> = floors.iter().map(|f| !f.is_empty(Direction::Down)).collect();
        Self {
            any_up:   up.contains(&true),
            any_down: down.contains(&true),
            up,
            down,
        }
    }

    #[inline]
    pub fn num_floors(&self) -> usize {
        self.up.len()
    }

    /// Is someone waiting at `floor` to travel in `dir`?
    #[inline]
    pub fn has_call(&self, floor: usize, dir: Direction) -> bool {
        let table = match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        };
        table.get(floor).copied().unwrap_or(false)
    }

    /// Is someone waiting at `floor` in either direction?
    #[inline]
    pub fn has_any_call(&self, floor: usize) -> bool {
        self.has_call(floor, Direction::Up) || self.has_call(floor, Direction::Down)
    }

    /// `true` iff any floor has a call in either direction.
    #[inline]
    pub fn call_pending(&self) -> bool {
        self.any_up || self.any_down
    }

    #[inline]
    pub fn up_call_pending(&self) -> bool {
        self.any_up
    }

    #[inline]
    pub fn down_call_pending(&self) -> bool {
        self.any_down
    }

    /// Number of floors with an up call.
    pub fn up_call_count(&self) -> usize {
        self.up.iter().filter(|&&c| c).count()
    }

    /// Number of floors with a down call.
    pub fn down_call_count(&self) -> usize {
        self.down.iter().filter(|&&c| c).count()
    }

    /// `true` iff some floor strictly beyond `from` in `dir` has a call in
    /// either direction.
    pub fn calls_ahead(&self, from: usize, dir: Direction) -> bool {
        match dir {
            Direction::Up => (from + 1..self.num_floors()).any(|f| self.has_any_call(f)),
            Direction::Down => (0..from.min(self.num_floors())).any(|f| self.has_any_call(f)),
        }
    }

    /// Where the demand is, seen from `from`: `Down` only when strictly more
    /// floors at or below `from` have calls than floors above it.
    pub fn suggested_direction(&self, from: usize) -> Direction {
        let (mut at_or_below, mut above) = (0usize, 0usize);
        for floor in (0..self.num_floors()).filter(|&f| self.has_any_call(f)) {
            if floor <= from {
                at_or_below += 1;
            } else {
                above += 1;
            }
        }
        if at_or_below > above { Direction::Down } else { Direction::Up }
    }

    /// Lowest floor with an up call.
    pub fn lowest_up_call(&self) -> Option<usize> {
        self.up.iter().position(|&c| c)
    }

    /// Highest floor with a down call.
    pub fn highest_down_call(&self) -> Option<usize> {
        self.down.iter().rposition(|&c| c)
    }

    /// The call a stopped car at `from` should serve next, or `None` when
    /// nobody is waiting anywhere.
    pub fn next_call(&self, from: usize) -> Option<Call> {
        let here_up = self.has_call(from, Direction::Up);
        let here_down = self.has_call(from, Direction::Down);
        let here = |direction| Some(Call { floor: from, direction });

        match (here_up, here_down) {
            (true, true) => return here(self.suggested_direction(from)),
            (true, false) => return here(Direction::Up),
            (false, true) => return here(Direction::Down),
            (false, false) => {}
        }

        match (self.lowest_up_call(), self.highest_down_call()) {
            (None, None) => None,
            (Some(floor), None) => Some(Call { floor, direction: Direction::Up }),
            (None, Some(floor)) => Some(Call { floor, direction: Direction::Down }),
            (Some(up_floor), Some(down_floor)) => {
                let up = Call { floor: up_floor, direction: Direction::Up };
                let down = Call { floor: down_floor, direction: Direction::Down };
                let (n_up, n_down) = (self.up_call_count(), self.down_call_count());
                if n_up != n_down {
                    return Some(if n_up > n_down { up } else { down });
                }
                if up_floor.abs_diff(from) <= down_floor.abs_diff(from) {
                    Some(up)
                } else {
                    Some(down)
                }
            }
        }
    }
}
