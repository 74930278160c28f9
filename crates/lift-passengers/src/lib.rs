//! `lift-passengers` — passenger groups and the queues that hold them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`group`]       | `PassengerGroup`, `ArrivalRequest`                        |
//! | [`floor_queue`] | `FloorQueue` — bounded up/down FIFOs for one floor        |
//! | [`schedule`]    | `ArrivalSchedule` (`BTreeMap<Tick, Vec<ArrivalRequest>>`) |
//! | [`loader`]      | `load_arrivals_csv`, `load_arrivals_reader`               |
//! | [`generator`]   | `ArrivalGenerator` — seeded random arrival stream          |
//! | [`error`]       | `PassengerError`, `PassengerResult<T>`                    |
//!
//! # Ownership model
//!
//! A `PassengerGroup` is created once, when its arrival is merged into the
//! building, and is then *moved* — floor queue → car manifest → completed
//! list — never cloned.  Queues hand a rejected group back to the caller
//! instead of dropping it, so nothing leaves the system uncounted.

pub mod error;
pub mod floor_queue;
pub mod generator;
pub mod group;
pub mod loader;
pub mod schedule;


pub use error::{PassengerError, PassengerResult};
pub use floor_queue::FloorQueue;
pub use generator::ArrivalGenerator;
pub use group::{ArrivalRequest, PassengerGroup};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use schedule::ArrivalSchedule;
