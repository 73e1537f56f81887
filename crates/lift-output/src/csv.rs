//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `rider_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, RiderSnapshotRow, TickSummaryRow};

pub const TICK_SUMMARIES_FILE: &str = "tick_summaries.csv";
pub const RIDER_SNAPSHOTS_FILE: &str = "rider_snapshots.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join(TICK_SUMMARIES_FILE))?;
        summaries.write_record([
            "tick",
            "occupancy",
            "arrivals",
            "exits",
            "complaints",
            "average_wait",
            "elevator_floor",
            "doors_open",
            "load",
        ])?;

        let mut snapshots = Writer::from_path(dir.join(RIDER_SNAPSHOTS_FILE))?;
        snapshots.write_record(["rider_id", "label", "kind", "tick", "floor", "placement"])?;

        Ok(Self { summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[RiderSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record([
                row.rider_id.to_string(),
                row.label.clone(),
                row.kind.clone(),
                row.tick.to_string(),
                row.floor.map(|f| f.to_string()).unwrap_or_default(),
                row.placement.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        // An undefined average is left blank rather than written as "NaN".
        let average = if row.average_wait.is_nan() {
            String::new()
        } else {
            row.average_wait.to_string()
        };
        self.summaries.write_record([
            row.tick.to_string(),
            row.occupancy.to_string(),
            row.arrivals.to_string(),
            row.exits.to_string(),
            row.complaints.to_string(),
            average,
            row.elevator_floor.to_string(),
            (row.doors_open as u8).to_string(),
            row.load.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        debug!("csv output flushed");
        Ok(())
    }
}
