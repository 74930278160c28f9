//! The passenger group — one request moved through the building as a unit.

use lift_core::{BuildingConfig, Direction, GroupId, Tick};

use crate::{PassengerError, PassengerResult};

// ── ArrivalRequest ────────────────────────────────────────────────────────────

/// A request to create a passenger group, as supplied by the arrival feed.
///
/// Requests carry no id; the building assigns one when the request is
/// merged into a floor queue, so ids follow merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRequest {
    /// Tick at which the group shows up at `origin`.
    pub tick:          Tick,
    /// Number of people travelling together.
    pub size:          u32,
    pub origin:        usize,
    pub destination:   usize,
    /// Ticks the group is willing to wait before giving up.  `None` waits
    /// forever.
    pub give_up_after: Option<u64>,
}

impl ArrivalRequest {
    pub fn new(tick: Tick, size: u32, origin: usize, destination: usize) -> Self {
        Self { tick, size, origin, destination, give_up_after: None }
    }

    /// Attach a patience limit.
    pub fn with_patience(mut self, ticks: u64) -> Self {
        self.give_up_after = Some(ticks);
        self
    }

    /// Check the request against the building it is headed for.
    ///
    /// A group larger than the car could never board, so it is rejected here
    /// rather than allowed to block its floor forever.
    pub fn validate(&self, config: &BuildingConfig) -> PassengerResult<()> {
        config.check_floor(self.origin)?;
        config.check_floor(self.destination)?;
        if self.origin == self.destination {
            return Err(PassengerError::SameFloor(self.origin));
        }
        if self.size == 0 {
            return Err(PassengerError::EmptyGroup);
        }
        if self.size > config.car.capacity {
            return Err(PassengerError::OversizedGroup {
                size:     self.size,
                capacity: config.car.capacity,
            });
        }
        Ok(())
    }
}

// ── PassengerGroup ────────────────────────────────────────────────────────────

/// One group of people sharing origin, destination, and arrival tick.
///
/// Everything but the two lifecycle stamps is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerGroup {
    id:            GroupId,
    size:          u32,
    origin:        usize,
    destination:   usize,
    direction:     Direction,
    arrival_tick:  Tick,
    give_up_after: Option<u64>,
    board_tick:    Option<Tick>,
    arrived_tick:  Option<Tick>,
}

impl PassengerGroup {
    /// Create a group from a request.
    ///
    /// Only the building-independent invariants are checked here (non-empty,
    /// origin ≠ destination); use [`ArrivalRequest::validate`] for the rest.
    pub fn new(id: GroupId, request: &ArrivalRequest) -> PassengerResult<Self> {
        if request.origin == request.destination {
            return Err(PassengerError::SameFloor(request.origin));
        }
        if request.size == 0 {
            return Err(PassengerError::EmptyGroup);
        }
        Ok(Self {
            id,
            size:          request.size,
            origin:        request.origin,
            destination:   request.destination,
            direction:     Direction::of_trip(request.origin, request.destination),
            arrival_tick:  request.tick,
            give_up_after: request.give_up_after,
            board_tick:    None,
            arrived_tick:  None,
        })
    }

    #[inline]
    pub fn id(&self) -> GroupId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> usize {
        self.destination
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    #[inline]
    pub fn board_tick(&self) -> Option<Tick> {
        self.board_tick
    }

    #[inline]
    pub fn arrived_tick(&self) -> Option<Tick> {
        self.arrived_tick
    }

    /// Tick at which a still-waiting group abandons its queue, if it has a
    /// patience limit.
    pub fn give_up_tick(&self) -> Option<Tick> {
        self.give_up_after.map(|t| self.arrival_tick + t)
    }

    /// Stamp the boarding tick.  Called once, by the car.
    pub fn mark_boarded(&mut self, tick: Tick) {
        debug_assert!(self.board_tick.is_none(), "{} boarded twice", self.id);
        self.board_tick = Some(tick);
    }

    /// Stamp the arrival-at-destination tick.  Called once, by the car.
    pub fn mark_arrived(&mut self, tick: Tick) {
        debug_assert!(self.arrived_tick.is_none(), "{} offloaded twice", self.id);
        self.arrived_tick = Some(tick);
    }

    /// Ticks spent queued before boarding.
    pub fn wait_to_board(&self) -> Option<u64> {
        self.board_tick.map(|b| b.since(self.arrival_tick))
    }

    /// Ticks from arrival at the origin to arrival at the destination.
    pub fn trip_time(&self) -> Option<u64> {
        self.arrived_tick.map(|a| a.since(self.arrival_tick))
    }
}
