//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RiderSnapshotRow, TickSummaryRow};

/// Sink for simulation output.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of rider snapshots.
    fn write_snapshots(&mut self, rows: &[RiderSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
