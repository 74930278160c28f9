//! `lift-dispatch` — which pending call should the car serve next?
//!
//! A [`CallManager`] is a snapshot of call presence built from the floor
//! queues by [`CallManager::scan`].  It owns no queue state and is never
//! updated in place: callers rebuild it whenever the queues may have
//! changed, so the table cannot drift from the queues it describes.
//!
//! # Priority policy (used from the stopped state)
//!
//! 1. A call on the car's own floor wins.  With calls in both directions
//!    there, the [`suggested_direction`][CallManager::suggested_direction]
//!    decides.
//! 2. Otherwise the candidates are the *lowest* up call and the *highest*
//!    down call in the building.
//! 3. Between two candidates: the direction with more pending calls wins,
//!    then the nearer floor, then `Up`.

pub mod manager;

#[cfg(test)]
mod tests;

pub use manager::{Call, CallManager};
