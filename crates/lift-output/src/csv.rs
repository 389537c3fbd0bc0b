//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `completions.csv`
//! - `car_positions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarPositionRow, CompletionRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    completions: Writer<File>,
    positions:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut completions = Writer::from_path(dir.join("completions.csv"))?;
        completions.write_record([
            "request_id",
            "origin",
            "destination",
            "requested_at",
            "picked_up_at",
            "arrived_at",
            "car_id",
        ])?;

        let mut positions = Writer::from_path(dir.join("car_positions.csv"))?;
        positions.write_record(["tick", "car_id", "floor", "state"])?;

        Ok(Self { completions, positions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()> {
        self.completions.write_record(&[
            row.request_id.to_string(),
            row.origin.to_string(),
            row.destination.to_string(),
            row.requested_at.to_string(),
            row.picked_up_at.to_string(),
            row.arrived_at.to_string(),
            row.car_id.to_string(),
        ])?;
        Ok(())
    }

    fn write_positions(&mut self, rows: &[CarPositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.tick.to_string(),
                row.car_id.to_string(),
                row.floor.to_string(),
                row.state.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.completions.flush()?;
        self.positions.flush()?;
        Ok(())
    }
}
