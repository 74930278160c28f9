//! `FloorQueue` — the two bounded FIFOs (up, down) waiting at one floor.

use std::collections::VecDeque;

use lift_core::{Direction, GroupId, Tick};

use crate::PassengerGroup;

/// Bounded up/down FIFOs for one floor.
///
/// Each direction holds at most `capacity` groups.  Insertion order is never
/// disturbed: groups leave from the front (boarding) or, for give-ups, are
/// removed in place.
#[derive(Debug, Clone)]
pub struct FloorQueue {
    up:       VecDeque<PassengerGroup>,
    down:     VecDeque<PassengerGroup>,
    capacity: usize,
}

impl FloorQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            up:   VecDeque::with_capacity(capacity),
            down: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    fn lane(&self, dir: Direction) -> &VecDeque<PassengerGroup> {
        match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    #[inline]
    fn lane_mut(&mut self, dir: Direction) -> &mut VecDeque<PassengerGroup> {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// Per-direction capacity in groups.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self, dir: Direction) -> bool {
        self.lane(dir).is_empty()
    }

    #[inline]
    pub fn is_full(&self, dir: Direction) -> bool {
        self.lane(dir).len() >= self.capacity
    }

    /// Number of groups waiting in `dir`.
    #[inline]
    pub fn len(&self, dir: Direction) -> usize {
        self.lane(dir).len()
    }

    /// Append `group` to the queue matching its own direction.
    ///
    /// A full queue hands the group back unchanged in `Err` so the caller can
    /// record the overflow.
    pub fn enqueue(&mut self, group: PassengerGroup) -> Result<(), PassengerGroup> {
        let dir = group.direction();
        if self.is_full(dir) {
            return Err(group);
        }
        self.lane_mut(dir).push_back(group);
        Ok(())
    }

    #[inline]
    pub fn peek_front(&self, dir: Direction) -> Option<&PassengerGroup> {
        self.lane(dir).front()
    }

    #[inline]
    pub fn pop_front(&mut self, dir: Direction) -> Option<PassengerGroup> {
        self.lane_mut(dir).pop_front()
    }

    /// Remove the group with `id` from whichever lane holds it.
    pub fn remove(&mut self, id: GroupId) -> Option<PassengerGroup> {
        for dir in [Direction::Up, Direction::Down] {
            let lane = self.lane_mut(dir);
            if let Some(pos) = lane.iter().position(|g| g.id() == id) {
                return lane.remove(pos);
            }
        }
        None
    }

    /// Remove every group whose give-up tick is at or before `now`, keeping
    /// the relative order of those that stay.  Up lane first, then down.
    pub fn remove_expired(&mut self, now: Tick) -> Vec<PassengerGroup> {
        let mut expired = Vec::new();
        for dir in [Direction::Up, Direction::Down] {
            let lane = self.lane_mut(dir);
            let mut kept = VecDeque::with_capacity(lane.len());
            for group in lane.drain(..) {
                match group.give_up_tick() {
                    Some(deadline) if deadline <= now => expired.push(group),
                    _ => kept.push_back(group),
                }
            }
            *lane = kept;
        }
        expired
    }

    /// Groups waiting in `dir`, front first.
    pub fn iter(&self, dir: Direction) -> impl Iterator<Item = &PassengerGroup> {
        self.lane(dir).iter()
    }

    /// People (not groups) waiting in `dir`.
    pub fn people(&self, dir: Direction) -> u32 {
        self.lane(dir).iter().map(PassengerGroup::size).sum()
    }

    /// People waiting in both directions.
    pub fn total_people(&self) -> u32 {
        self.people(Direction::Up) + self.people(Direction::Down)
    }
}
