//! The `Building` struct and its tick loop.

use std::collections::VecDeque;

use lift_car::{CarState, ElevatorCar};
use lift_core::{
    BuildingConfig, Direction, GroupId, GroupIdGen, LiftError, OverflowPolicy, SimClock, Tick,
};
use lift_dispatch::CallManager;
use lift_passengers::{ArrivalRequest, ArrivalSchedule, FloorQueue, PassengerGroup};

use crate::event::{BuildingEvent, GroupInfo};
use crate::observer::BuildingObserver;
use crate::record::{AbandonedGroup, PassengerRecord};
use crate::snapshot::{BuildingSnapshot, FloorView};
use crate::SimResult;

/// Head counts by where people currently are.
///
/// Every person who has arrived is in exactly one bucket, so
/// [`is_balanced`][Self::is_balanced] holds after every tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PeopleTally {
    pub arrived:    u64,
    pub waiting:    u64,
    pub held:       u64,
    pub aboard:     u64,
    pub delivered:  u64,
    pub abandoned:  u64,
    pub overflowed: u64,
}

impl PeopleTally {
    /// People still inside the building's queues or the car.
    pub fn in_system(&self) -> u64 {
        self.waiting + self.held + self.aboard
    }

    pub fn is_balanced(&self) -> bool {
        self.arrived == self.in_system() + self.delivered + self.abandoned + self.overflowed
    }
}

/// One elevator serving a stack of floors.
///
/// `Building` owns every piece of simulation state and drives the per-tick
/// flow described in the crate docs.  Create via
/// [`BuildingBuilder`][crate::BuildingBuilder].
pub struct Building {
    pub(crate) config:     BuildingConfig,
    pub(crate) clock:      SimClock,
    pub(crate) floors:     Vec<FloorQueue>,
    pub(crate) car:        ElevatorCar,
    pub(crate) schedule:   ArrivalSchedule,
    /// Arrivals waiting for room in a full queue, in arrival order.
    pub(crate) held:       VecDeque<PassengerGroup>,
    pub(crate) ids:        GroupIdGen,
    pub(crate) completed:  Vec<PassengerGroup>,
    pub(crate) abandoned:  Vec<AbandonedGroup>,
    pub(crate) overflowed: Vec<PassengerGroup>,
    pub(crate) arrived:    u64,
    pub(crate) announced:  bool,
}

impl Building {
    pub(crate) fn new(config: BuildingConfig) -> Self {
        let floors = (0..config.num_floors)
            .map(|_| FloorQueue::new(config.floor_queue_capacity))
            .collect();
        let car = ElevatorCar::new(config.car, config.num_floors);
        Self {
            config,
            clock: SimClock::new(),
            floors,
            car,
            schedule: ArrivalSchedule::new(),
            held: VecDeque::new(),
            ids: GroupIdGen::new(),
            completed: Vec::new(),
            abandoned: Vec::new(),
            overflowed: Vec::new(),
            arrived: 0,
            announced: false,
        }
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    /// Queue a future arrival.  The request is validated now; it becomes a
    /// passenger group when the clock reaches its tick.
    ///
    /// A request whose tick has already passed is merged on the next step.
    pub fn schedule_arrival(&mut self, request: ArrivalRequest) -> SimResult<()> {
        request.validate(&self.config)?;
        self.schedule.push(request);
        Ok(())
    }

    /// Queue a batch of arrivals.  Nothing is scheduled unless every request
    /// is valid.
    pub fn schedule_arrivals<I>(&mut self, requests: I) -> SimResult<()>
    where
        I: IntoIterator<Item = ArrivalRequest>,
    {
        let requests: Vec<ArrivalRequest> = requests.into_iter().collect();
        for r in &requests {
            r.validate(&self.config)?;
        }
        for r in requests {
            self.schedule.push(r);
        }
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Process exactly one tick and return the resulting state.
    pub fn step<O: BuildingObserver>(&mut self, observer: &mut O) -> SimResult<BuildingSnapshot> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        if !self.announced {
            self.announced = true;
            let car = self.car.config();
            self.emit(observer, BuildingEvent::Configured {
                tick:                now,
                capacity:            car.capacity,
                ticks_per_floor:     car.ticks_per_floor,
                ticks_door:          car.ticks_door,
                passengers_per_tick: car.passengers_per_tick,
                state:               self.car.state(),
                floor:               self.car.floor(),
            });
        }

        self.merge_arrivals(now, observer)?;

        self.car.begin_tick();
        let next = self.handle(now, observer);
        let change = self.car.commit(next);
        if change.is_change() {
            self.emit(observer, BuildingEvent::StateChanged {
                tick:       now,
                prev_state: change.prev_state,
                curr_state: change.curr_state,
                prev_floor: change.prev_floor,
                curr_floor: change.curr_floor,
            });
        }

        self.clock.advance();
        let snapshot = self.snapshot();
        observer.on_tick_end(&snapshot);
        Ok(snapshot)
    }

    /// Run exactly `n` ticks.
    ///
    /// A run may be driven in several chunks, so this does not call
    /// [`on_sim_end`][BuildingObserver::on_sim_end]; the driver does once it
    /// is done.
    pub fn run_ticks<O: BuildingObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Step until [`is_idle`][Self::is_idle] or `max_ticks` have run.
    ///
    /// Returns the number of ticks processed.  Stopping on the tick limit is
    /// not an error; callers check `is_idle` to tell the two apart.
    pub fn run_until_idle<O: BuildingObserver>(
        &mut self,
        max_ticks: u64,
        observer:  &mut O,
    ) -> SimResult<u64> {
        let mut ran = 0;
        while ran < max_ticks && !self.is_idle() {
            self.step(observer)?;
            ran += 1;
        }
        if !self.is_idle() {
            tracing::warn!(ran, "tick limit reached with work outstanding");
        }
        tracing::debug!(ran, delivered = self.completed.len(), "run finished");
        observer.on_sim_end(self.clock.current_tick);
        Ok(ran)
    }

    /// Nothing scheduled, nothing waiting, and the car is parked empty.
    pub fn is_idle(&self) -> bool {
        self.schedule.is_empty()
            && self.held.is_empty()
            && self.floors.iter().all(|f| f.total_people() == 0)
            && self.car.is_empty()
            && self.car.state() == CarState::Stop
    }

    fn merge_arrivals<O: BuildingObserver>(
        &mut self,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        self.retry_held(now, observer);
        for request in self.schedule.drain_due(now) {
            let group = PassengerGroup::new(self.ids.next_id(), &request)?;
            self.arrived += u64::from(group.size());
            self.admit(group, now, observer);
        }
        Ok(())
    }

    /// Put a fresh arrival in its queue, or apply the overflow policy.
    ///
    /// `CallRegistered` is reported only once the group is in a floor queue.
    fn admit<O: BuildingObserver>(&mut self, group: PassengerGroup, now: Tick, observer: &mut O) {
        let hold = self.config.overflow == OverflowPolicy::Hold;
        let info = GroupInfo::from(&group);

        // Held groups for the same queue keep their place in line.
        if hold && self.held_for(info.origin, info.direction) {
            self.emit(observer, BuildingEvent::Held { tick: now, group: info });
            self.held.push_back(group);
            return;
        }

        match self.floors[info.origin].enqueue(group) {
            Ok(()) => self.emit(observer, BuildingEvent::CallRegistered { tick: now, group: info }),
            Err(group) if hold => {
                self.emit(observer, BuildingEvent::Held { tick: now, group: info });
                self.held.push_back(group);
            }
            Err(group) => {
                self.emit(observer, BuildingEvent::Overflowed { tick: now, group: info });
                self.overflowed.push(group);
            }
        }
    }

    fn held_for(&self, floor: usize, dir: Direction) -> bool {
        self.held.iter().any(|g| g.origin() == floor && g.direction() == dir)
    }

    /// Move held groups into queues that have room, oldest first.
    fn retry_held<O: BuildingObserver>(&mut self, now: Tick, observer: &mut O) {
        let mut blocked: Vec<(usize, Direction)> = Vec::new();
        for group in std::mem::take(&mut self.held) {
            let key = (group.origin(), group.direction());
            if blocked.contains(&key) {
                self.held.push_back(group);
                continue;
            }
            let info = GroupInfo::from(&group);
            match self.floors[key.0].enqueue(group) {
                Ok(()) => {
                    self.emit(observer, BuildingEvent::CallRegistered { tick: now, group: info })
                }
                Err(group) => {
                    blocked.push(key);
                    self.held.push_back(group);
                }
            }
        }
    }

    pub(crate) fn emit<O: BuildingObserver>(&self, observer: &mut O, event: BuildingEvent) {
        if self.config.events_enabled {
            observer.on_event(&event);
        }
    }

    pub(crate) fn calls(&self) -> CallManager {
        CallManager::scan(&self.floors)
    }

    // ── Give-ups ──────────────────────────────────────────────────────────

    /// Remove a waiting group from its queue (or the held backlog) and record
    /// it as abandoned at the current tick.
    ///
    /// Fails if the group is not waiting: unknown, aboard, or already gone.
    pub fn give_up<O: BuildingObserver>(&mut self, id: GroupId, observer: &mut O) -> SimResult<()> {
        let group = self
            .floors
            .iter_mut()
            .find_map(|f| f.remove(id))
            .or_else(|| {
                let pos = self.held.iter().position(|g| g.id() == id)?;
                self.held.remove(pos)
            })
            .ok_or(LiftError::GroupNotWaiting(id))?;
        self.abandon(group, observer);
        Ok(())
    }

    /// Abandon every waiting group whose patience has run out by the current
    /// tick.  Returns how many groups gave up.
    pub fn give_up_expired<O: BuildingObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.current_tick;
        let mut expired: Vec<PassengerGroup> = Vec::new();
        for floor in &mut self.floors {
            expired.extend(floor.remove_expired(now));
        }
        let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.held)
            .into_iter()
            .partition(|g| g.give_up_tick().is_some_and(|t| t <= now));
        self.held = kept.into();
        expired.extend(gone);

        let count = expired.len();
        for group in expired {
            self.abandon(group, observer);
        }
        count
    }

    fn abandon<O: BuildingObserver>(&mut self, group: PassengerGroup, observer: &mut O) {
        let record = AbandonedGroup { group, gave_up_at: self.clock.current_tick };
        self.emit(observer, BuildingEvent::GaveUp {
            tick:  record.gave_up_at,
            group: GroupInfo::from(&record.group),
            wait:  record.wait(),
        });
        self.abandoned.push(record);
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// The next tick to be processed.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn car(&self) -> &ElevatorCar {
        &self.car
    }

    pub fn floor_queue(&self, floor: usize) -> Option<&FloorQueue> {
        self.floors.get(floor)
    }

    pub fn floors(&self) -> &[FloorQueue] {
        &self.floors
    }

    /// Groups delivered to their destination, in offload order.
    pub fn completed(&self) -> &[PassengerGroup] {
        &self.completed
    }

    pub fn abandoned(&self) -> &[AbandonedGroup] {
        &self.abandoned
    }

    /// Groups turned away by a full queue under [`OverflowPolicy::Drop`].
    pub fn overflowed(&self) -> &[PassengerGroup] {
        &self.overflowed
    }

    /// Groups waiting for room under [`OverflowPolicy::Hold`].
    pub fn held(&self) -> impl Iterator<Item = &PassengerGroup> {
        self.held.iter()
    }

    /// Arrivals scheduled but not yet due.
    pub fn pending_arrivals(&self) -> usize {
        self.schedule.len()
    }

    /// Delivered groups in offload order, then abandoned groups in give-up
    /// order.
    pub fn passenger_records(&self) -> Vec<PassengerRecord> {
        self.completed
            .iter()
            .filter_map(PassengerRecord::delivered)
            .chain(self.abandoned.iter().map(PassengerRecord::gave_up))
            .collect()
    }

    pub fn tally(&self) -> PeopleTally {
        let sum = |groups: &[PassengerGroup]| -> u64 {
            groups.iter().map(|g| u64::from(g.size())).sum()
        };
        PeopleTally {
            arrived:    self.arrived,
            waiting:    self.floors.iter().map(|f| u64::from(f.total_people())).sum(),
            held:       self.held.iter().map(|g| u64::from(g.size())).sum(),
            aboard:     u64::from(self.car.aboard()),
            delivered:  sum(&self.completed),
            abandoned:  self.abandoned.iter().map(|a| u64::from(a.group.size())).sum(),
            overflowed: sum(&self.overflowed),
        }
    }

    /// People currently waiting, held, or riding.
    pub fn people_in_system(&self) -> u64 {
        self.tally().in_system()
    }

    pub fn snapshot(&self) -> BuildingSnapshot {
        let sizes = |floor: &FloorQueue, dir: Direction| -> Vec<u32> {
            floor.iter(dir).map(PassengerGroup::size).collect()
        };
        BuildingSnapshot {
            ticks_elapsed: self.clock.elapsed(),
            state:         self.car.state(),
            floor:         self.car.floor(),
            heading:       self.car.heading(),
            door:          self.car.door(),
            aboard:        self.car.aboard(),
            floors:        self
                .floors
                .iter()
                .map(|f| FloorView { up: sizes(f, Direction::Up), down: sizes(f, Direction::Down) })
                .collect(),
        }
    }
}
