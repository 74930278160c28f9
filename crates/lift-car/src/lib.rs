//! `lift-car` — the elevator car.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`state`]    | `CarState` — the seven FSM states; `DoorPhase`           |
//! | [`manifest`] | `Manifest` — boarded groups keyed by destination floor  |
//! | [`car`]      | `ElevatorCar` — configuration, position, timers          |
//!
//! The car knows *how* to move, open its doors, board, and offload; it does
//! not decide *when*.  Transition decisions need the floor queues and the
//! call table, which belong to the building, so the per-state handlers live
//! in `lift-sim` and drive the car through the primitives here.
//!
//! # Timing model
//!
//! `time_in_state` counts ticks spent in the current state and is reset only
//! when [`ElevatorCar::commit`] installs a *different* state.  Every timed
//! primitive increments it first and then compares:
//!
//! | Primitive                     | Completes when                          |
//! |-------------------------------|-----------------------------------------|
//! | `advance_position`            | `time_in_state % ticks_per_floor == 0`  |
//! | `advance_door`                | `time_in_state >= ticks_door`           |
//! | `tick_batch` (board/offload)  | `time_in_state >= batch_delay`          |

pub mod car;
pub mod manifest;
pub mod state;


pub use car::{ElevatorCar, StateChange};
pub use manifest::Manifest;
pub use state::{CarState, DoorPhase};
