//! Passenger-group identifiers.
//!
//! Ids are handed out by a [`GroupIdGen`] owned by the building, so every run
//! starts numbering from zero and two buildings in the same process never
//! share a counter.

use std::fmt;

/// Identifier of one passenger group.  Monotonic within a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}

/// Monotonic, resettable [`GroupId`] allocator.
#[derive(Debug, Default, Clone)]
pub struct GroupIdGen {
    next: u32,
}

impl GroupIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out since the last reset.
    pub fn issued(&self) -> u32 {
        self.next
    }

    /// Restart numbering at zero.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
