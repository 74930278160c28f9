//! `TraceObserver<W>` — bridges `BuildingObserver` to an `OutputWriter`.

use lift_sim::{BuildingObserver, BuildingSnapshot, PassengerRecord};

use crate::row::{CarTraceRow, PassengerRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`BuildingObserver`] that writes one [`CarTraceRow`] per tick to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check them with [`take_error`][Self::take_error],
/// or let [`finish`][Self::finish] report them.
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Trace rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write the passenger records, flush, and hand back the writer.
    ///
    /// The first error from any earlier trace write takes precedence.
    pub fn finish(mut self, records: &[PassengerRecord]) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        let rows: Vec<PassengerRow> = records.iter().map(PassengerRow::from).collect();
        self.writer.write_passengers(&rows)?;
        self.writer.finish()?;
        Ok(self.writer)
    }

    /// Unwrap the inner writer without finishing it.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> BuildingObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, snapshot: &BuildingSnapshot) {
        let result = self.writer.write_trace(&CarTraceRow::from(snapshot));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }
}
