//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarTraceRow, OutputResult, PassengerRow};

pub trait OutputWriter {
    /// Write one car trace row.
    fn write_trace(&mut self, row: &CarTraceRow) -> OutputResult<()>;

    /// Write a batch of passenger rows.
    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
