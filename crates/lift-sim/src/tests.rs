//! Unit tests for lift-sim.

use lift_car::{CarState, DoorPhase};
use lift_core::{BuildingConfig, CarConfig, Direction, GroupId, LiftError, OverflowPolicy, Tick};
use lift_passengers::{ArrivalGenerator, ArrivalRequest, PassengerError};

use crate::{
    Building, BuildingBuilder, BuildingEvent, BuildingObserver, NoopObserver, RecordOutcome,
    RecordingObserver, SimError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(
    floors: usize,
    capacity: u32,
    ticks_per_floor: u32,
    ticks_door: u32,
    per_tick: u32,
) -> BuildingConfig {
    BuildingConfig {
        num_floors: floors,
        car: CarConfig { capacity, ticks_per_floor, ticks_door, passengers_per_tick: per_tick },
        ..BuildingConfig::default()
    }
}

/// 3 floors, capacity 4, 2 ticks per floor, 1-tick doors, 2 people per tick.
fn small() -> BuildingConfig {
    config(3, 4, 2, 1, 2)
}

fn arrival(tick: u64, size: u32, origin: usize, destination: usize) -> ArrivalRequest {
    ArrivalRequest::new(Tick(tick), size, origin, destination)
}

fn building(config: BuildingConfig, arrivals: Vec<ArrivalRequest>) -> Building {
    BuildingBuilder::new(config).arrivals(arrivals).build().unwrap()
}

/// Ids of the groups named by events of one kind, in emission order.
fn ids_of(obs: &RecordingObserver, kind: fn(&BuildingEvent) -> bool) -> Vec<u32> {
    obs.events().iter().filter(|e| kind(e)).filter_map(|e| e.group()).map(|g| g.id.0).collect()
}

/// `(state, floor)` after each of the next `n` ticks.
fn trace(b: &mut Building, n: u64) -> Vec<(CarState, usize)> {
    (0..n)
        .map(|_| {
            let snap = b.step(&mut NoopObserver).unwrap();
            assert!(b.tally().is_balanced());
            (snap.state, snap.floor)
        })
        .collect()
}

// ── Single trip ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod single_trip {
    use super::*;
    use lift_car::CarState::*;

    #[test]
    fn full_cycle_trace() {
        let mut b = building(small(), vec![arrival(0, 2, 0, 2)]);
        let got = trace(&mut b, 11);
        assert_eq!(got, vec![
            (DoorOpening, 0),
            (Board, 0),
            (DoorClosing, 0),
            (MoveOneFloor, 0),
            (MoveOneFloor, 0),
            (MoveOneFloor, 1),
            (MoveOneFloor, 1),
            (DoorOpening, 2),
            (Offload, 2),
            (DoorClosing, 2),
            (Stop, 2),
        ]);
        assert!(b.is_idle());
    }

    #[test]
    fn trip_times_are_stamped() {
        let mut b = building(small(), vec![arrival(0, 2, 0, 2)]);
        let ran = b.run_until_idle(100, &mut NoopObserver).unwrap();
        assert_eq!(ran, 11);

        let done = &b.completed()[0];
        assert_eq!(done.board_tick(), Some(Tick(2)));
        assert_eq!(done.arrived_tick(), Some(Tick(9)));

        let records = b.passenger_records();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].outcome,
            RecordOutcome::Delivered { wait_to_board: 2, total_time: 9 }
        );
    }

    #[test]
    fn events_follow_the_trip() {
        let mut b = building(small(), vec![arrival(0, 2, 0, 2)]);
        let mut obs = RecordingObserver::new();
        b.run_until_idle(100, &mut obs).unwrap();

        let events = obs.events();
        assert!(matches!(events[0], BuildingEvent::Configured { capacity: 4, floor: 0, .. }));
        assert!(matches!(events[1], BuildingEvent::CallRegistered { tick: Tick(0), .. }));
        assert!(events.iter().any(|e| matches!(e, BuildingEvent::Boarded { tick: Tick(2), .. })));
        assert!(events.iter().any(|e| matches!(e, BuildingEvent::Offloaded { tick: Tick(9), .. })));

        // Nine transitions, counting the floor change at tick 5.
        assert_eq!(obs.state_changes().count(), 9);
        assert_eq!(obs.ticks(), 11);
    }

    #[test]
    fn disabled_events_are_silent() {
        let mut cfg = small();
        cfg.events_enabled = false;
        let mut b = building(cfg, vec![arrival(0, 2, 0, 2)]);
        let mut obs = RecordingObserver::new();
        b.run_until_idle(100, &mut obs).unwrap();
        assert!(obs.events().is_empty());
        assert_eq!(obs.ticks(), 11);
        assert_eq!(b.completed().len(), 1);
    }

    #[test]
    fn door_phases_track_timer() {
        let mut b = building(config(3, 4, 2, 3, 2), vec![arrival(0, 1, 0, 1)]);
        let doors: Vec<_> = (0..4).map(|_| b.step(&mut NoopObserver).unwrap().door).collect();
        assert_eq!(doors, vec![
            DoorPhase::Closed,
            DoorPhase::Opening,
            DoorPhase::Opening,
            DoorPhase::Open,
        ]);
        assert_eq!(b.car().state(), Board);
    }

    #[test]
    fn idle_building_stays_stopped() {
        let mut b = building(small(), vec![]);
        assert!(b.is_idle());
        assert_eq!(b.run_until_idle(50, &mut NoopObserver).unwrap(), 0);
        assert_eq!(trace(&mut b, 3), vec![(Stop, 0); 3]);
    }
}

// ── Dispatch from Stop ────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;
    use lift_car::CarState::*;

    #[test]
    fn own_floor_call_served_first() {
        let mut b = building(config(5, 4, 2, 1, 2), vec![arrival(0, 1, 3, 4), arrival(0, 1, 0, 2)]);
        assert_eq!(trace(&mut b, 1), vec![(DoorOpening, 0)]);
        assert_eq!(b.car().direction(), Direction::Up);
    }

    #[test]
    fn move_to_floor_ignores_intermediate_calls() {
        let mut b = building(config(5, 4, 2, 1, 2), vec![
            arrival(0, 1, 3, 0),
            arrival(1, 1, 1, 4),
        ]);
        let got = trace(&mut b, 7);
        assert_eq!(got, vec![
            (MoveToFloor, 0),
            (MoveToFloor, 0),
            (MoveToFloor, 1),
            (MoveToFloor, 1),
            (MoveToFloor, 2),
            (MoveToFloor, 2),
            (DoorOpening, 3),
        ]);
        // Serves the call it came for, in the call's direction.
        assert_eq!(b.car().heading(), Some(Direction::Down));
    }

    #[test]
    fn empty_car_turns_for_opposite_queue_after_offload() {
        let mut b = building(small(), vec![arrival(0, 2, 0, 2), arrival(1, 1, 2, 0)]);
        let got = trace(&mut b, 10);
        assert_eq!(got[8], (Offload, 2));
        assert_eq!(got[9], (Board, 2));
        assert_eq!(b.car().direction(), Direction::Down);

        b.run_until_idle(100, &mut NoopObserver).unwrap();
        let ids: Vec<_> = b.completed().iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec![GroupId(0), GroupId(1)]);
        assert_eq!(b.car().floor(), 0);
    }

    #[test]
    fn stranded_empty_car_stops_instead_of_running_off() {
        // B gives up while the car is on its way up to fetch it.
        let mut b = building(config(4, 4, 3, 1, 2), vec![
            arrival(0, 1, 0, 1),
            arrival(0, 1, 3, 0).with_patience(11),
        ]);
        let mut got = Vec::new();
        for _ in 0..14 {
            b.give_up_expired(&mut NoopObserver);
            let snap = b.step(&mut NoopObserver).unwrap();
            got.push((snap.state, snap.floor));
        }
        assert_eq!(got[9], (MoveOneFloor, 1));
        assert_eq!(got[12], (Stop, 2));
        assert_eq!(got[13], (Stop, 2));
        assert_eq!(b.abandoned().len(), 1);
        assert!(b.is_idle());
    }
}

// ── Boarding ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boarding {
    use super::*;

    #[test]
    fn front_group_blocks_when_too_big() {
        let mut b = building(small(), vec![
            arrival(0, 3, 0, 2),
            arrival(0, 2, 0, 2),
            arrival(0, 1, 0, 2),
        ]);
        let mut obs = RecordingObserver::new();
        for _ in 0..3 {
            b.step(&mut obs).unwrap();
        }
        // The size-1 group fits but may not pass the size-2 group.
        assert_eq!(b.car().aboard(), 3);
        let waiting: Vec<_> =
            b.floor_queue(0).unwrap().iter(Direction::Up).map(|g| g.size()).collect();
        assert_eq!(waiting, vec![2, 1]);
        let skipped: Vec<_> = obs
            .events()
            .iter()
            .filter_map(|e| match e {
                BuildingEvent::SkippedForCapacity { group, .. } => Some(group.id),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec![GroupId(1)]);

        b.run_until_idle(200, &mut obs).unwrap();
        let ids: Vec<_> = b.completed().iter().map(|g| g.id().0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(b.tally().delivered, 6);
    }

    #[test]
    fn boarding_delay_scales_with_people() {
        // 4 people at 2 per tick hold the doors for 2 ticks.
        let mut b = building(small(), vec![arrival(0, 4, 0, 1)]);
        let states: Vec<_> = trace(&mut b, 4).into_iter().map(|(s, _)| s).collect();
        assert_eq!(states, vec![
            CarState::DoorOpening,
            CarState::Board,
            CarState::Board,
            CarState::DoorClosing,
        ]);
    }

    #[test]
    fn random_traffic_respects_capacity() {
        let cfg = config(8, 10, 2, 1, 3);
        let arrivals = ArrivalGenerator::new(7, 8, 5, 0.3).generate(400);
        let mut b = building(cfg, arrivals);
        for _ in 0..3000 {
            let snap = b.step(&mut NoopObserver).unwrap();
            assert!(snap.aboard <= 10);
            assert!(snap.floor < 8);
            assert!(b.tally().is_balanced());
        }
        assert!(!b.completed().is_empty());
        for g in b.completed() {
            assert!(g.board_tick().unwrap() >= g.arrival_tick());
            assert!(g.arrived_tick().unwrap() > g.board_tick().unwrap());
        }
    }
}

// ── Overflow ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod overflow {
    use super::*;

    fn one_slot(policy: OverflowPolicy) -> BuildingConfig {
        BuildingConfig { floor_queue_capacity: 1, overflow: policy, ..small() }
    }

    #[test]
    fn drop_turns_group_away() {
        let arrivals = vec![arrival(0, 1, 0, 2), arrival(0, 2, 0, 1)];
        let mut b = building(one_slot(OverflowPolicy::Drop), arrivals);
        let mut obs = RecordingObserver::new();
        b.step(&mut obs).unwrap();
        assert_eq!(b.overflowed().len(), 1);
        assert_eq!(b.overflowed()[0].size(), 2);
        assert_eq!(ids_of(&obs, |e| matches!(e, BuildingEvent::Overflowed { .. })), vec![1]);
        // A dropped group never registered a call.
        assert_eq!(ids_of(&obs, |e| matches!(e, BuildingEvent::CallRegistered { .. })), vec![0]);

        b.run_until_idle(100, &mut obs).unwrap();
        assert_eq!(b.completed().len(), 1);
        let tally = b.tally();
        assert_eq!(tally.overflowed, 2);
        assert!(tally.is_balanced());
    }

    #[test]
    fn hold_waits_for_room() {
        let arrivals = vec![arrival(0, 1, 0, 2), arrival(0, 2, 0, 1)];
        let mut b = building(one_slot(OverflowPolicy::Hold), arrivals);
        b.step(&mut NoopObserver).unwrap();
        assert_eq!(b.held().count(), 1);
        assert_eq!(b.people_in_system(), 3);

        b.run_until_idle(200, &mut NoopObserver).unwrap();
        assert_eq!(b.held().count(), 0);
        assert_eq!(b.completed().len(), 2);
        assert!(b.overflowed().is_empty());
    }

    #[test]
    fn held_groups_keep_their_place() {
        let mut b = building(one_slot(OverflowPolicy::Hold), vec![
            arrival(0, 1, 1, 2),
            arrival(0, 1, 1, 2),
            arrival(0, 1, 1, 2),
        ]);
        let mut obs = RecordingObserver::new();
        b.step(&mut obs).unwrap();
        let held: Vec<_> = b.held().map(|g| g.id().0).collect();
        assert_eq!(held, vec![1, 2]);
        assert_eq!(ids_of(&obs, |e| matches!(e, BuildingEvent::Held { .. })), vec![1, 2]);

        b.run_until_idle(300, &mut obs).unwrap();
        let boarded: Vec<_> = {
            let mut v: Vec<_> =
                b.completed().iter().map(|g| (g.board_tick(), g.id().0)).collect();
            v.sort();
            v.into_iter().map(|(_, id)| id).collect()
        };
        assert_eq!(boarded, vec![0, 1, 2]);

        // Held groups register their call when they reach the queue, not on arrival.
        let registered: Vec<_> = obs
            .events()
            .iter()
            .filter_map(|e| match e {
                BuildingEvent::CallRegistered { tick, group } => Some((group.id.0, tick.0)),
                _ => None,
            })
            .collect();
        assert_eq!(registered.len(), 3);
        assert_eq!(registered[0], (0, 0));
        assert!(registered[1..].iter().all(|&(_, tick)| tick > 0));
    }
}

// ── Give-ups ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod give_up {
    use super::*;

    fn held_backlog() -> Building {
        let cfg = BuildingConfig {
            floor_queue_capacity: 1,
            overflow: OverflowPolicy::Hold,
            ..small()
        };
        building(cfg, vec![
            arrival(0, 1, 1, 2),
            arrival(0, 1, 1, 2).with_patience(2),
            arrival(0, 1, 1, 2),
            arrival(0, 1, 1, 2),
        ])
    }

    #[test]
    fn expired_group_is_recorded() {
        let cfg = config(3, 4, 5, 1, 2);
        let mut b = building(cfg, vec![arrival(0, 1, 1, 0).with_patience(2)]);
        let mut obs = RecordingObserver::new();
        for _ in 0..3 {
            b.give_up_expired(&mut obs);
            b.step(&mut obs).unwrap();
        }
        assert_eq!(b.abandoned().len(), 1);
        assert_eq!(b.abandoned()[0].gave_up_at, Tick(2));
        assert_eq!(b.abandoned()[0].wait(), 2);
        assert!(obs.events().iter().any(|e| matches!(e, BuildingEvent::GaveUp { wait: 2, .. })));

        let records = b.passenger_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, RecordOutcome::GaveUp { wait: 2 });
        assert!(b.tally().is_balanced());
    }

    #[test]
    fn give_up_by_id() {
        let mut b = building(small(), vec![arrival(0, 1, 2, 0)]);
        b.step(&mut NoopObserver).unwrap();
        b.give_up(GroupId(0), &mut NoopObserver).unwrap();
        assert_eq!(b.people_in_system(), 0);
        assert_eq!(b.abandoned()[0].gave_up_at, Tick(1));
    }

    #[test]
    fn held_group_gives_up() {
        let mut b = held_backlog();
        let mut obs = RecordingObserver::new();
        b.step(&mut obs).unwrap();
        b.step(&mut obs).unwrap();
        let held: Vec<_> = b.held().map(|g| g.id().0).collect();
        assert_eq!(held, vec![1, 2, 3]);

        // Patience runs out while still in the backlog.
        assert_eq!(b.give_up_expired(&mut obs), 1);
        let gone: Vec<_> = b.abandoned().iter().map(|a| (a.group.id().0, a.wait())).collect();
        assert_eq!(gone, vec![(1, 2)]);
        assert!(b.tally().is_balanced());

        // By id, from the middle of the backlog.
        b.give_up(GroupId(2), &mut obs).unwrap();
        let held: Vec<_> = b.held().map(|g| g.id().0).collect();
        assert_eq!(held, vec![3]);
        assert_eq!(b.abandoned()[1].gave_up_at, Tick(2));
        let tally = b.tally();
        assert_eq!(tally.held, 1);
        assert_eq!(tally.abandoned, 2);
        assert!(tally.is_balanced());

        let gave_up = ids_of(&obs, |e| matches!(e, BuildingEvent::GaveUp { .. }));
        assert_eq!(gave_up, vec![1, 2]);
        assert_eq!(ids_of(&obs, |e| matches!(e, BuildingEvent::Held { .. })), vec![1, 2, 3]);
    }

    #[test]
    fn backlog_keeps_order_after_give_ups() {
        let mut b = held_backlog();
        b.step(&mut NoopObserver).unwrap();
        b.give_up(GroupId(1), &mut NoopObserver).unwrap();
        b.step(&mut NoopObserver).unwrap();
        b.give_up_expired(&mut NoopObserver);
        assert_eq!(b.held().count(), 2);

        b.run_until_idle(300, &mut NoopObserver).unwrap();
        let boarded: Vec<_> = {
            let mut v: Vec<_> =
                b.completed().iter().map(|g| (g.board_tick(), g.id().0)).collect();
            v.sort();
            v.into_iter().map(|(_, id)| id).collect()
        };
        assert_eq!(boarded, vec![0, 2, 3]);
        assert_eq!(b.held().count(), 0);
        let tally = b.tally();
        assert_eq!(tally.delivered, 3);
        assert_eq!(tally.abandoned, 1);
        assert!(tally.is_balanced());
    }

    #[test]
    fn unknown_or_boarded_group_cannot_give_up() {
        let mut b = building(small(), vec![arrival(0, 2, 0, 2)]);
        let err = b.give_up(GroupId(9), &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Config(LiftError::GroupNotWaiting(GroupId(9)))));

        for _ in 0..3 {
            b.step(&mut NoopObserver).unwrap();
        }
        assert_eq!(b.car().aboard(), 2);
        assert!(b.give_up(GroupId(0), &mut NoopObserver).is_err());
    }

    #[test]
    fn records_list_delivered_before_abandoned() {
        let mut b = building(small(), vec![
            arrival(0, 1, 1, 0).with_patience(1),
            arrival(0, 1, 0, 2),
        ]);
        for _ in 0..40 {
            b.give_up_expired(&mut NoopObserver);
            b.step(&mut NoopObserver).unwrap();
        }
        let outcomes: Vec<_> = b.passenger_records().iter().map(|r| r.id).collect();
        assert_eq!(outcomes, vec![GroupId(1), GroupId(0)]);
    }
}

// ── Construction and scheduling ───────────────────────────────────────────────

#[cfg(test)]
mod setup {
    use super::*;

    #[test]
    fn invalid_config_rejected() {
        let err = BuildingBuilder::new(config(1, 4, 2, 1, 2)).build().err().unwrap();
        assert!(matches!(err, SimError::Config(LiftError::Config(_))));
        let err = BuildingBuilder::new(config(3, 4, 0, 1, 2)).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn arrival_outside_building_rejected() {
        let builder = BuildingBuilder::new(small()).arrivals([arrival(0, 1, 0, 3)]);
        let err = builder.build().err().unwrap();
        assert!(matches!(
            err,
            SimError::Arrival(PassengerError::Core(LiftError::FloorOutOfRange {
                floor:      3,
                num_floors: 3,
            }))
        ));
    }

    #[test]
    fn batch_schedule_is_all_or_nothing() {
        let mut b = building(small(), vec![]);
        let res = b.schedule_arrivals([arrival(0, 1, 0, 1), arrival(0, 9, 0, 1)]);
        assert!(matches!(
            res,
            Err(SimError::Arrival(PassengerError::OversizedGroup { size: 9, capacity: 4 }))
        ));
        assert_eq!(b.pending_arrivals(), 0);
    }

    #[test]
    fn late_arrival_merges_next_tick() {
        let mut b = building(small(), vec![]);
        b.run_ticks(5, &mut NoopObserver).unwrap();
        b.schedule_arrival(arrival(2, 1, 1, 2)).unwrap();
        let mut obs = RecordingObserver::new();
        b.step(&mut obs).unwrap();
        assert_eq!(b.pending_arrivals(), 0);
        let registered = |e: &BuildingEvent| {
            matches!(e, BuildingEvent::CallRegistered { tick: Tick(5), .. })
        };
        assert!(obs.events().iter().any(registered));
        assert_eq!(b.floor_queue(1).unwrap().len(Direction::Up), 1);
    }

    #[test]
    fn snapshot_lists_queues_front_first() {
        let mut b = building(config(4, 8, 2, 1, 2), vec![
            arrival(0, 2, 1, 3),
            arrival(0, 3, 1, 2),
            arrival(0, 1, 2, 0),
        ]);
        let snap = b.step(&mut NoopObserver).unwrap();
        assert_eq!(snap.ticks_elapsed, 1);
        assert_eq!(snap.floors[1].up, vec![2, 3]);
        assert_eq!(snap.floors[2].down, vec![1]);
        assert_eq!(snap.waiting(), 6);
        assert_eq!(snap.state, CarState::MoveToFloor);
    }

    /// Counts `on_sim_end` calls.
    #[derive(Default)]
    struct EndCounter(u32);

    impl BuildingObserver for EndCounter {
        fn on_sim_end(&mut self, _final_tick: Tick) {
            self.0 += 1;
        }
    }

    #[test]
    fn only_run_until_idle_ends_the_run() {
        let mut b = building(small(), vec![arrival(0, 2, 0, 2)]);
        let mut ends = EndCounter::default();
        b.run_ticks(3, &mut ends).unwrap();
        b.run_ticks(3, &mut ends).unwrap();
        assert_eq!(ends.0, 0);

        b.run_until_idle(100, &mut ends).unwrap();
        assert_eq!(ends.0, 1);
        assert!(b.is_idle());
    }
}
