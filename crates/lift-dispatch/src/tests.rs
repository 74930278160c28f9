//! Unit tests for lift-dispatch.

use lift_core::{Direction, GroupId, Tick};
use lift_passengers::{ArrivalRequest, FloorQueue, PassengerGroup};

use crate::{Call, CallManager};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A building of `n` floors with one waiting group per `(floor, dir)` entry.
fn floors(n: usize, calls: &[(usize, Direction)]) -> Vec<FloorQueue> {
    let mut floors: Vec<FloorQueue> = (0..n).map(|_| FloorQueue::new(4)).collect();
    for (i, &(floor, dir)) in calls.iter().enumerate() {
        let destination = match dir {
            Direction::Up => floor + 1,
            Direction::Down => floor - 1,
        };
        let req = ArrivalRequest::new(Tick(0), 1, floor, destination);
        let group = PassengerGroup::new(GroupId(i as u32), &req).unwrap();
        floors[floor].enqueue(group).unwrap();
    }
    floors
}

fn manager(n: usize, calls: &[(usize, Direction)]) -> CallManager {
    CallManager::scan(&floors(n, calls))
}

const UP: Direction = Direction::Up;
const DOWN: Direction = Direction::Down;

// ── Call presence ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod presence {
    use super::*;

    #[test]
    fn empty_building_has_no_calls() {
        let cm = manager(5, &[]);
        assert!(!cm.call_pending());
        assert!(!cm.up_call_pending());
        assert!(!cm.down_call_pending());
        assert_eq!(cm.next_call(2), None);
    }

    #[test]
    fn table_reflects_queues() {
        let cm = manager(5, &[(1, UP), (3, DOWN), (3, UP)]);
        assert!(cm.has_call(1, UP));
        assert!(!cm.has_call(1, DOWN));
        assert!(cm.has_any_call(3));
        assert_eq!(cm.up_call_count(), 2);
        assert_eq!(cm.down_call_count(), 1);
        assert!(cm.call_pending());
    }

    #[test]
    fn rescan_sees_dequeued_group() {
        let mut fl = floors(3, &[(0, UP)]);
        assert!(CallManager::scan(&fl).call_pending());
        fl[0].pop_front(UP);
        assert!(!CallManager::scan(&fl).call_pending());
    }

    #[test]
    fn calls_ahead_is_strict() {
        let cm = manager(5, &[(2, DOWN)]);
        assert!(cm.calls_ahead(1, UP));
        assert!(!cm.calls_ahead(2, UP));
        assert!(!cm.calls_ahead(2, DOWN));
        assert!(cm.calls_ahead(4, DOWN));
        assert!(!cm.calls_ahead(0, DOWN));
    }

    #[test]
    fn lowest_up_and_highest_down() {
        let cm = manager(6, &[(3, UP), (1, UP), (2, DOWN), (5, DOWN)]);
        assert_eq!(cm.lowest_up_call(), Some(1));
        assert_eq!(cm.highest_down_call(), Some(5));
    }
}

// ── suggested_direction ───────────────────────────────────────────────────────

#[cfg(test)]
mod suggested_direction {
    use super::*;

    #[test]
    fn majority_above_is_up() {
        let cm = manager(6, &[(4, UP), (5, DOWN), (1, UP)]);
        assert_eq!(cm.suggested_direction(2), UP);
    }

    #[test]
    fn tie_is_up() {
        let cm = manager(6, &[(4, UP), (1, UP)]);
        assert_eq!(cm.suggested_direction(2), UP);
    }

    #[test]
    fn current_floor_counts_as_below() {
        // One call at the car's floor, one above: a tie → Up.
        let cm = manager(6, &[(2, UP), (4, DOWN)]);
        assert_eq!(cm.suggested_direction(2), UP);
        // Only the car's floor has calls: at-or-below wins → Down.
        let cm = manager(6, &[(2, UP), (2, DOWN)]);
        assert_eq!(cm.suggested_direction(2), DOWN);
    }
}

// ── next_call ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod next_call {
    use super::*;

    #[test]
    fn call_on_current_floor_wins() {
        let cm = manager(6, &[(5, DOWN), (2, DOWN)]);
        assert_eq!(cm.next_call(2), Some(Call { floor: 2, direction: DOWN }));
    }

    #[test]
    fn both_directions_here_follow_suggestion() {
        // Two calls above floor 1 besides floor 1 itself → Up.
        let cm = manager(6, &[(1, UP), (1, DOWN), (3, UP), (4, DOWN)]);
        assert_eq!(cm.next_call(1), Some(Call { floor: 1, direction: UP }));
        // Nothing above floor 4 → at-or-below majority → Down.
        let cm = manager(6, &[(4, UP), (4, DOWN), (0, UP)]);
        assert_eq!(cm.next_call(4), Some(Call { floor: 4, direction: DOWN }));
    }

    #[test]
    fn single_candidate_returned() {
        let cm = manager(6, &[(4, UP)]);
        assert_eq!(cm.next_call(0), Some(Call { floor: 4, direction: UP }));
        let cm = manager(6, &[(3, DOWN)]);
        assert_eq!(cm.next_call(5), Some(Call { floor: 3, direction: DOWN }));
    }

    #[test]
    fn more_calls_in_a_direction_wins() {
        // Two up calls vs one down call — up wins even though down is nearer.
        let cm = manager(8, &[(0, UP), (1, UP), (5, DOWN)]);
        assert_eq!(cm.next_call(4), Some(Call { floor: 0, direction: UP }));
        // Two down calls vs one up call.
        let cm = manager(8, &[(3, UP), (5, DOWN), (7, DOWN)]);
        assert_eq!(cm.next_call(2), Some(Call { floor: 7, direction: DOWN }));
    }

    #[test]
    fn equal_counts_prefer_nearer_floor() {
        let cm = manager(8, &[(0, UP), (5, DOWN)]);
        assert_eq!(cm.next_call(4), Some(Call { floor: 5, direction: DOWN }));
        let cm = manager(8, &[(3, UP), (7, DOWN)]);
        assert_eq!(cm.next_call(2), Some(Call { floor: 3, direction: UP }));
    }

    #[test]
    fn full_tie_resolves_up() {
        // Car at floor 2: up call two floors below, down call two floors above.
        let cm = manager(5, &[(0, UP), (4, DOWN)]);
        assert_eq!(cm.next_call(2), Some(Call { floor: 0, direction: UP }));
    }
}
