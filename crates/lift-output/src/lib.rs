//! `lift-output` — result writers for the lift simulator.
//!
//! | Writer      | Files created                        |
//! |-------------|--------------------------------------|
//! | [`CsvWriter`] | `passengers.csv`, `car_trace.csv`  |
//!
//! Writers implement [`OutputWriter`].  [`TraceObserver`] implements
//! `lift_sim::BuildingObserver` and records one trace row per tick; the
//! passenger rows are written once the run is over.
//!
//! Floors are written 1-based, as a person in the lobby would number them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, TraceObserver};
//!
//! let mut obs = TraceObserver::new(CsvWriter::new(Path::new("./output"))?);
//! building.run_until_idle(10_000, &mut obs)?;
//! obs.finish(&building.passenger_records())?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{CarTraceRow, PassengerRow};
pub use writer::OutputWriter;
