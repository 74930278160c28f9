//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Every duration in the
//! simulator (door motion, floor-to-floor travel, boarding batches, passenger
//! waits) is a whole number of ticks, so all timing arithmetic is exact and
//! comparisons are O(1).  What a tick means in wall-clock terms is the
//! driver's business; the core never looks at a real clock.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The building's tick counter.
///
/// The orchestrator processes `current_tick` and then calls
/// [`advance`][Self::advance]; ticks are never skipped or batched.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The tick that the next call to `Building::step` will process.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── Batch helpers ─────────────────────────────────────────────────────────────

/// Ticks needed to move `people` through the doors at `per_tick` people per
/// tick (rounds up — a partial batch still costs a whole tick).
///
/// `per_tick` is validated non-zero by [`CarConfig::validate`][crate::CarConfig::validate].
#[inline]
pub fn batch_ticks(people: u32, per_tick: u32) -> u64 {
    u64::from(people.div_ceil(per_tick.max(1)))
}
