//! `lift-sim` — tick loop orchestrator for the lift simulator.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Arrivals  — held-back groups retry their queue, then every request
//!                 due at or before this tick becomes a PassengerGroup and
//!                 is enqueued (CallRegistered / Held / Overflowed events).
//!   ② Handler   — the handler for the car's current state reads the floor
//!                 queues and a fresh CallManager, drives the car, and
//!                 returns the next state.
//!   ③ Commit    — previous state/floor are recorded, the next state is
//!                 installed, StateChanged is emitted if anything moved.
//!   ④ Advance   — the clock moves to the next tick.
//! ```
//!
//! Exactly one handler step runs per tick; ticks are never skipped or
//! batched.  The building is single-threaded and performs no I/O.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, Tick};
//! use lift_passengers::ArrivalRequest;
//! use lift_sim::{BuildingBuilder, NoopObserver};
//!
//! let mut building = BuildingBuilder::new(BuildingConfig::default()).build()?;
//! building.schedule_arrival(ArrivalRequest::new(Tick(0), 2, 0, 4))?;
//! building.run_until_idle(1_000, &mut NoopObserver)?;
//! for record in building.passenger_records() { /* export */ }
//! ```

pub mod builder;
pub mod building;
pub mod error;
pub mod event;
mod handlers;
pub mod observer;
pub mod record;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::BuildingBuilder;
pub use building::{Building, PeopleTally};
pub use error::{SimError, SimResult};
pub use event::{BuildingEvent, GroupInfo};
pub use observer::{BuildingObserver, NoopObserver, RecordingObserver, TracingObserver};
pub use record::{AbandonedGroup, PassengerRecord, RecordOutcome};
pub use snapshot::{BuildingSnapshot, FloorView};
