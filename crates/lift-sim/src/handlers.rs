//! One handler per car state.
//!
//! Each handler runs once per tick, drives the car, and returns the state for
//! the next tick.  Handlers never return an error: arrivals are validated
//! before they reach a queue, so every transition here is total.

use lift_car::CarState;
use lift_core::Tick;

use crate::building::Building;
use crate::event::{BuildingEvent, GroupInfo};
use crate::observer::BuildingObserver;

impl Building {
    pub(crate) fn handle<O: BuildingObserver>(&mut self, now: Tick, observer: &mut O) -> CarState {
        match self.car.state() {
            CarState::Stop => self.handle_stop(),
            CarState::MoveToFloor => self.handle_move_to_floor(),
            CarState::DoorOpening => self.handle_door_opening(),
            CarState::Offload => self.handle_offload(now, observer),
            CarState::Board => self.handle_board(now, observer),
            CarState::DoorClosing => self.handle_door_closing(),
            CarState::MoveOneFloor => self.handle_move_one_floor(),
        }
    }

    /// Idle.  Pick the next call; open here or travel non-stop to it.
    fn handle_stop(&mut self) -> CarState {
        let floor = self.car.floor();
        match self.calls().next_call(floor) {
            None => CarState::Stop,
            Some(call) if call.floor == floor => {
                self.car.set_direction(call.direction);
                CarState::DoorOpening
            }
            Some(call) => {
                self.car.plan_move_to(call.floor, call.direction);
                CarState::MoveToFloor
            }
        }
    }

    /// Non-stop leg; ignores every floor but the target.
    fn handle_move_to_floor(&mut self) -> CarState {
        self.car.advance_position();
        if self.car.arrive_if_at_target() {
            CarState::DoorOpening
        } else {
            CarState::MoveToFloor
        }
    }

    fn handle_door_opening(&mut self) -> CarState {
        if !self.car.advance_door() {
            CarState::DoorOpening
        } else if self.car.has_passengers_for(self.car.floor()) {
            CarState::Offload
        } else {
            CarState::Board
        }
    }

    /// Unload on the first tick, then wait out the offload delay.
    fn handle_offload<O: BuildingObserver>(&mut self, now: Tick, observer: &mut O) -> CarState {
        if self.car.is_first_tick() {
            for group in self.car.offload(now) {
                let info = GroupInfo::from(&group);
                self.emit(observer, BuildingEvent::Offloaded { tick: now, group: info });
                self.completed.push(group);
            }
        }
        if !self.car.tick_batch() {
            return CarState::Offload;
        }

        let (floor, dir) = (self.car.floor(), self.car.direction());
        let queue = &self.floors[floor];
        if !queue.is_empty(dir) {
            return CarState::Board;
        }
        // Nothing ahead for an empty car: turn around for the people here.
        if self.car.is_empty()
            && !self.calls().calls_ahead(floor, dir)
            && !queue.is_empty(dir.reverse())
        {
            self.car.reverse_direction();
            return CarState::Board;
        }
        CarState::DoorClosing
    }

    /// Board front groups in FIFO order until the queue empties or the front
    /// group does not fit, then wait out the boarding delay.
    fn handle_board<O: BuildingObserver>(&mut self, now: Tick, observer: &mut O) -> CarState {
        let (floor, dir) = (self.car.floor(), self.car.direction());
        while self.car.accepting() {
            let Some(front) = self.floors[floor].peek_front(dir) else {
                break;
            };
            let info = GroupInfo::from(front);
            if !self.car.can_admit(info.size) {
                // Front of the line only; nobody behind it jumps ahead.
                self.car.mark_full_for_stop();
                self.emit(observer, BuildingEvent::SkippedForCapacity { tick: now, group: info });
                break;
            }
            let Some(group) = self.floors[floor].pop_front(dir) else {
                break;
            };
            self.car.board(group, now);
            self.emit(observer, BuildingEvent::Boarded { tick: now, group: info });
        }

        if self.car.tick_batch() {
            self.car.end_boarding();
            CarState::DoorClosing
        } else {
            CarState::Board
        }
    }

    fn handle_door_closing(&mut self) -> CarState {
        if !self.car.advance_door() {
            return CarState::DoorClosing;
        }
        if !self.car.is_empty() {
            return CarState::MoveOneFloor;
        }

        let calls = self.calls();
        let (floor, dir) = (self.car.floor(), self.car.direction());
        if !calls.call_pending() {
            CarState::Stop
        } else if calls.calls_ahead(floor, dir) {
            CarState::MoveOneFloor
        } else if calls.has_call(floor, dir) {
            CarState::DoorOpening
        } else if calls.has_call(floor, dir.reverse()) {
            self.car.reverse_direction();
            CarState::DoorOpening
        } else {
            // Every remaining call is behind us.
            self.car.reverse_direction();
            CarState::MoveOneFloor
        }
    }

    /// Floor-by-floor travel; stops wherever there is work.
    fn handle_move_one_floor(&mut self) -> CarState {
        if !self.car.advance_position() {
            return CarState::MoveOneFloor;
        }

        let (floor, dir) = (self.car.floor(), self.car.direction());
        if self.car.has_passengers_for(floor) || !self.floors[floor].is_empty(dir) {
            return CarState::DoorOpening;
        }
        if self.car.is_empty() && !self.calls().calls_ahead(floor, dir) {
            if !self.floors[floor].is_empty(dir.reverse()) {
                self.car.reverse_direction();
                return CarState::DoorOpening;
            }
            // The calls that sent us this way are gone.
            return CarState::Stop;
        }
        CarState::MoveOneFloor
    }
}
