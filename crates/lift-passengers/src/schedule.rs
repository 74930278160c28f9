//! `ArrivalSchedule` — pending arrivals keyed by the tick they are due.
//!
//! The driver may hand the building a whole day's arrivals up front; the
//! schedule keeps them sorted so each tick only touches the requests due
//! now.  `BTreeMap` gives O(log W) insert and pop where W is the number of
//! distinct future arrival ticks.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::ArrivalRequest;

/// A priority queue mapping ticks → arrival requests due at that tick.
#[derive(Default, Debug)]
pub struct ArrivalSchedule {
    inner: BTreeMap<Tick, Vec<ArrivalRequest>>,
    /// Cached total request count for O(1) `len()`.
    total: usize,
}

impl ArrivalSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `request` for its own `tick`.
    ///
    /// Requests due at the same tick keep their insertion order.
    pub fn push(&mut self, request: ArrivalRequest) {
        self.inner.entry(request.tick).or_default().push(request);
        self.total += 1;
    }

    /// Remove and return every request due at or before `now`, oldest tick
    /// first.
    ///
    /// Requests scheduled for a tick that has already been processed are
    /// picked up here too, at the next tick, rather than lost.
    pub fn drain_due(&mut self, now: Tick) -> Vec<ArrivalRequest> {
        let later = self.inner.split_off(&(now + 1));
        let due = std::mem::replace(&mut self.inner, later);
        let drained: Vec<ArrivalRequest> = due.into_values().flatten().collect();
        self.total -= drained.len();
        drained
    }

    /// The earliest tick with at least one pending request.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending requests.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// People across all pending requests.
    pub fn people(&self) -> u64 {
        self.inner
            .values()
            .flatten()
            .map(|r| u64::from(r.size))
            .sum()
    }
}
