//! `lift-core` — foundational types for the `lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `GroupId`, `GroupIdGen`                               |
//! | [`direction`]   | `Direction` (`Up` / `Down`)                           |
//! | [`time`]        | `Tick`, `SimClock`, `batch_ticks`                     |
//! | [`config`]      | `BuildingConfig`, `CarConfig`, `OverflowPolicy`       |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, CarConfig, OverflowPolicy};
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{GroupId, GroupIdGen};
pub use rng::SimRng;
pub use time::{SimClock, Tick, batch_ticks};
