//! `ElevatorCar` — configuration, position, timers, and manifest.

use lift_core::{CarConfig, Direction, Tick, batch_ticks};
use lift_passengers::PassengerGroup;

use crate::{CarState, DoorPhase, Manifest};

// ── StateChange ───────────────────────────────────────────────────────────────

/// What [`ElevatorCar::commit`] did this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StateChange {
    pub prev_state: CarState,
    pub curr_state: CarState,
    pub prev_floor: usize,
    pub curr_floor: usize,
}

impl StateChange {
    /// `true` if either the state or the floor differs from the start of the
    /// tick.
    #[inline]
    pub fn is_change(&self) -> bool {
        self.prev_state != self.curr_state || self.prev_floor != self.curr_floor
    }
}

// ── ElevatorCar ───────────────────────────────────────────────────────────────

/// The single car serving the building.
///
/// Created once per run at floor 0 in [`CarState::Stop`] with its doors
/// closed.  All mutation goes through the methods below so the manifest and
/// the aboard count can never disagree.
#[derive(Debug, Clone)]
pub struct ElevatorCar {
    config:     CarConfig,
    num_floors: usize,

    state:      CarState,
    prev_state: CarState,
    floor:      usize,
    prev_floor: usize,
    direction:  Direction,

    /// Ticks spent in `state`; reset when a different state is committed.
    time_in_state: u64,
    door:          DoorPhase,

    manifest: Manifest,

    /// Destination of the current `MoveToFloor` leg.
    target_floor:       usize,
    /// Direction adopted on reaching `target_floor`.
    post_arrival_dir:   Direction,
    /// Ticks the current board/offload batch takes.
    batch_delay:        u64,
    boarded_this_visit: u32,
    full_for_stop:      bool,
}

impl ElevatorCar {
    pub fn new(config: CarConfig, num_floors: usize) -> Self {
        Self {
            config,
            num_floors,
            state:              CarState::Stop,
            prev_state:         CarState::Stop,
            floor:              0,
            prev_floor:         0,
            direction:          Direction::Up,
            time_in_state:      0,
            door:               DoorPhase::Closed,
            manifest:           Manifest::new(),
            target_floor:       0,
            post_arrival_dir:   Direction::Up,
            batch_delay:        0,
            boarded_this_visit: 0,
            full_for_stop:      false,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &CarConfig {
        &self.config
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    #[inline]
    pub fn state(&self) -> CarState {
        self.state
    }

    #[inline]
    pub fn prev_state(&self) -> CarState {
        self.prev_state
    }

    #[inline]
    pub fn floor(&self) -> usize {
        self.floor
    }

    #[inline]
    pub fn prev_floor(&self) -> usize {
        self.prev_floor
    }

    /// The direction the car is serving, kept across a stop so the next leg
    /// can be compared against it.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction as seen from outside: `None` while stopped.
    #[inline]
    pub fn heading(&self) -> Option<Direction> {
        match self.state {
            CarState::Stop => None,
            _ => Some(self.direction),
        }
    }

    #[inline]
    pub fn time_in_state(&self) -> u64 {
        self.time_in_state
    }

    #[inline]
    pub fn door(&self) -> DoorPhase {
        self.door
    }

    /// People aboard.
    #[inline]
    pub fn aboard(&self) -> u32 {
        self.manifest.people()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }

    #[inline]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    #[inline]
    pub fn target_floor(&self) -> usize {
        self.target_floor
    }

    #[inline]
    pub fn batch_delay(&self) -> u64 {
        self.batch_delay
    }

    #[inline]
    pub fn boarded_this_visit(&self) -> u32 {
        self.boarded_this_visit
    }

    #[inline]
    pub fn is_full_for_stop(&self) -> bool {
        self.full_for_stop
    }

    /// `true` on the first tick of a state visit, before any timed primitive
    /// has run.
    #[inline]
    pub fn is_first_tick(&self) -> bool {
        self.time_in_state == 0
    }

    /// Is anyone aboard bound for `floor`?
    #[inline]
    pub fn has_passengers_for(&self, floor: usize) -> bool {
        self.manifest.has_floor(floor)
    }

    // ── Direction and travel plan ─────────────────────────────────────────

    #[inline]
    pub fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }

    #[inline]
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reverse();
    }

    /// Plan a non-stop leg to `floor`, after which the car serves
    /// `then_dir`.  Also points the car toward `floor`.
    pub fn plan_move_to(&mut self, floor: usize, then_dir: Direction) {
        self.direction = Direction::of_trip(self.floor, floor);
        self.target_floor = floor;
        self.post_arrival_dir = then_dir;
    }

    /// Has the `MoveToFloor` leg reached its target?  If so, adopt the
    /// planned direction.
    pub fn arrive_if_at_target(&mut self) -> bool {
        if self.floor == self.target_floor {
            self.direction = self.post_arrival_dir;
            true
        } else {
            false
        }
    }

    // ── Timed primitives ──────────────────────────────────────────────────

    /// Spend one tick travelling.  Returns `true` when the tick completes a
    /// floor-to-floor interval (the car has just reached a new floor).
    ///
    /// The car never leaves the shaft: a step past the top or bottom floor
    /// leaves it where it is.
    pub fn advance_position(&mut self) -> bool {
        self.time_in_state += 1;
        if self.time_in_state % u64::from(self.config.ticks_per_floor) != 0 {
            return false;
        }
        debug_assert!(
            self.direction.step(self.floor, self.num_floors).is_some(),
            "car driven {} past floor {}",
            self.direction,
            self.floor,
        );
        if let Some(next) = self.direction.step(self.floor, self.num_floors) {
            self.floor = next;
        }
        true
    }

    /// Spend one tick moving the doors in the direction the current state
    /// implies.  Returns `true` once the motion is complete.
    pub fn advance_door(&mut self) -> bool {
        self.time_in_state += 1;
        let done = self.time_in_state >= u64::from(self.config.ticks_door);
        self.door = match (self.state, done) {
            (CarState::DoorOpening, false) => DoorPhase::Opening,
            (CarState::DoorOpening, true) => DoorPhase::Open,
            (CarState::DoorClosing, false) => DoorPhase::Closing,
            (CarState::DoorClosing, true) => DoorPhase::Closed,
            (_, _) => self.door,
        };
        done
    }

    /// Spend one tick on the current board/offload batch.  Returns `true`
    /// once the batch delay has elapsed.
    pub fn tick_batch(&mut self) -> bool {
        self.time_in_state += 1;
        self.time_in_state >= self.batch_delay
    }

    // ── Passenger transfer ────────────────────────────────────────────────

    /// Unload every group bound for the current floor, stamping `now` as
    /// their arrival tick, and size the offload delay to the people leaving.
    pub fn offload(&mut self, now: Tick) -> Vec<PassengerGroup> {
        let mut leaving = self.manifest.take_floor(self.floor);
        let people: u32 = leaving.iter().map(PassengerGroup::size).sum();
        for group in &mut leaving {
            group.mark_arrived(now);
        }
        self.batch_delay = batch_ticks(people, self.config.passengers_per_tick);
        leaving
    }

    /// Would a group of `size` fit right now?
    #[inline]
    pub fn can_admit(&self, size: u32) -> bool {
        self.aboard() + size <= self.config.capacity
    }

    /// `true` while boarding may continue at this stop.
    #[inline]
    pub fn accepting(&self) -> bool {
        !self.full_for_stop && self.aboard() < self.config.capacity
    }

    /// Refuse further boarding until the doors next close.
    #[inline]
    pub fn mark_full_for_stop(&mut self) {
        self.full_for_stop = true;
    }

    /// Take ownership of a boarding group and extend the boarding delay.
    ///
    /// The caller checks [`can_admit`][Self::can_admit] first.
    pub fn board(&mut self, mut group: PassengerGroup, now: Tick) {
        debug_assert!(self.can_admit(group.size()), "boarding {} overfills the car", group.id());
        group.mark_boarded(now);
        self.boarded_this_visit += group.size();
        self.batch_delay = batch_ticks(self.boarded_this_visit, self.config.passengers_per_tick);
        self.direction = group.direction();
        self.manifest.push(group);
    }

    /// Reset the per-visit boarding counters.
    pub fn end_boarding(&mut self) {
        self.boarded_this_visit = 0;
        self.full_for_stop = false;
    }

    // ── Tick bookkeeping ──────────────────────────────────────────────────

    /// Record the floor the car starts this tick on.
    #[inline]
    pub fn begin_tick(&mut self) {
        self.prev_floor = self.floor;
    }

    /// Install `next` as the current state.
    ///
    /// The previous state is recorded first.  Timers and the batch delay are
    /// reset only if `next` differs from the current state; re-entering the
    /// same state keeps counting.
    pub fn commit(&mut self, next: CarState) -> StateChange {
        self.prev_state = self.state;
        self.state = next;
        if self.prev_state != self.state {
            self.time_in_state = 0;
            self.batch_delay = 0;
        }
        StateChange {
            prev_state: self.prev_state,
            curr_state: self.state,
            prev_floor: self.prev_floor,
            curr_floor: self.floor,
        }
    }
}
