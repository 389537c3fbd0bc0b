//! `lift-output` — simulation output for the rust_lift simulator.
//!
//! | Item               | Purpose                                                   |
//! |--------------------|-----------------------------------------------------------|
//! | [`CsvWriter`]      | `completions.csv` and `car_positions.csv` in a directory  |
//! | [`OutputObserver`] | `DispatchObserver` that feeds any [`OutputWriter`]        |
//! | [`WaitStatistics`] | wait / delay summary over delivered requests              |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! replay(&mut dispatcher, &records, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! if let Some(stats) = obs.statistics(config.door_open_ticks) {
//!     println!("{stats}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{CarPositionRow, CompletionRow};
pub use stats::WaitStatistics;
pub use writer::OutputWriter;
