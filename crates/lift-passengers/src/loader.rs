//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per passenger group.  Floors are 0-based.  `give_up_after` may be
//! left empty for a group that waits indefinitely.
//!
//! ```csv
//! tick,size,origin,destination,give_up_after
//! 0,2,0,4,
//! 3,1,5,0,40
//! 3,4,2,3,25
//! ```
//!
//! Rows need not be sorted; the building's `ArrivalSchedule` orders them.
//! Building-dependent checks (floor range, car capacity) happen when the
//! requests are scheduled, not here.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::Tick;

use crate::{ArrivalRequest, PassengerError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    tick:          u64,
    size:          u32,
    origin:        usize,
    destination:   usize,
    give_up_after: Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load arrival requests from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> Result<Vec<ArrivalRequest>, PassengerError> {
    let file = std::fs::File::open(path)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a scenario in
/// a binary.
pub fn load_arrivals_reader<R: Read>(reader: R) -> Result<Vec<ArrivalRequest>, PassengerError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (line, result) in csv_reader.deserialize::<ArrivalRecord>().enumerate() {
        let row = result.map_err(|e| PassengerError::Parse(e.to_string()))?;
        if row.origin == row.destination {
            return Err(PassengerError::Parse(format!(
                "row {}: origin and destination are both floor {}",
                line + 1,
                row.origin
            )));
        }
        requests.push(ArrivalRequest {
            tick:          Tick(row.tick),
            size:          row.size,
            origin:        row.origin,
            destination:   row.destination,
            give_up_after: row.give_up_after,
        });
    }
    Ok(requests)
}
