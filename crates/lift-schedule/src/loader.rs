//! CSV request-stream loader.
//!
//! # CSV format
//!
//! One request per line, no header row, ticks non-decreasing:
//!
//! ```csv
//! 0,3,7
//! 0,12,0
//! 4,0,55
//! ```
//!
//! Columns are `tick,origin,destination`.  Blank lines are skipped.  Floor
//! bounds and `origin != destination` are *not* checked here: the dispatcher
//! validates them at submission so a stream can be replayed against
//! buildings of different heights.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRow {
    tick:        u64,
    origin:      i32,
    destination: i32,
}

/// One entry of the inbound request stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RequestRecord {
    pub tick:        Tick,
    pub origin:      Floor,
    pub destination: Floor,
}

impl RequestRecord {
    pub fn new(tick: u64, origin: i32, destination: i32) -> Self {
        Self { tick: Tick(tick), origin: Floor(origin), destination: Floor(destination) }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a request stream from a CSV file.
pub fn load_requests_csv(path: &Path) -> Result<Vec<RequestRecord>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for streams embedded in
/// the binary.
pub fn load_requests_reader<R: Read>(reader: R) -> Result<Vec<RequestRecord>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<RequestRecord> = Vec::new();
    let mut previous = Tick::ZERO;

    for (i, result) in csv_reader.deserialize::<RequestRow>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let record = RequestRecord::new(row.tick, row.origin, row.destination);

        if record.tick < previous {
            return Err(ScheduleError::NonMonotonic {
                record: i + 1,
                tick:   record.tick,
                previous,
            });
        }
        previous = record.tick;
        records.push(record);
    }

    Ok(records)
}
