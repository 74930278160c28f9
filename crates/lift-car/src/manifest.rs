//! `Manifest` — the groups aboard, keyed by the floor they are going to.

use std::collections::BTreeMap;

use lift_passengers::PassengerGroup;

/// Boarded groups, owned by the car until they are offloaded.
///
/// `people` is kept equal to the sum of all group sizes.
#[derive(Debug, Default, Clone)]
pub struct Manifest {
    by_floor: BTreeMap<usize, Vec<PassengerGroup>>,
    people:   u32,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a boarded group.
    pub fn push(&mut self, group: PassengerGroup) {
        self.people += group.size();
        self.by_floor.entry(group.destination()).or_default().push(group);
    }

    /// Remove and return every group bound for `floor`, in boarding order.
    pub fn take_floor(&mut self, floor: usize) -> Vec<PassengerGroup> {
        let groups = self.by_floor.remove(&floor).unwrap_or_default();
        self.people -= groups.iter().map(PassengerGroup::size).sum::<u32>();
        groups
    }

    /// Is anyone aboard bound for `floor`?
    #[inline]
    pub fn has_floor(&self, floor: usize) -> bool {
        self.by_floor.contains_key(&floor)
    }

    /// People aboard.
    #[inline]
    pub fn people(&self) -> u32 {
        self.people
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_floor.is_empty()
    }

    /// Number of groups aboard.
    pub fn group_count(&self) -> usize {
        self.by_floor.values().map(Vec::len).sum()
    }

    /// Every group aboard, lowest destination first.
    pub fn iter(&self) -> impl Iterator<Item = &PassengerGroup> {
        self.by_floor.values().flatten()
    }

    /// Destination floors with someone aboard, ascending.
    pub fn destinations(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_floor.keys().copied()
    }
}
