//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `passengers.csv`
//! - `car_trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarTraceRow, OutputResult, PassengerRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    passengers: Writer<File>,
    trace:      Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut passengers = Writer::from_path(dir.join("passengers.csv"))?;
        passengers.write_record(["id", "size", "from", "to", "wait_to_board", "total_time"])?;

        let mut trace = Writer::from_path(dir.join("car_trace.csv"))?;
        trace.write_record(["tick", "floor", "state", "heading", "door", "aboard", "waiting"])?;

        Ok(Self { passengers, trace, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trace(&mut self, row: &CarTraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.state.to_owned(),
            row.heading.to_owned(),
            row.door.to_owned(),
            row.aboard.to_string(),
            row.waiting.to_string(),
        ])?;
        Ok(())
    }

    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()> {
        for row in rows {
            self.passengers.write_record(&[
                row.id.to_string(),
                row.size.to_string(),
                row.from.to_string(),
                row.to.to_string(),
                row.wait_to_board.to_string(),
                row.total_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.passengers.flush()?;
        self.trace.flush()?;
        Ok(())
    }
}
