//! `OutputObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use log::{info, warn};

use lift_car::Car;
use lift_core::{CarId, Tick};
use lift_dispatch::DispatchObserver;
use lift_schedule::Request;

use crate::row::{CarPositionRow, CompletionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, WaitStatistics};

/// A [`DispatchObserver`] that writes completions and car positions to any
/// [`OutputWriter`] backend and keeps the completion rows for statistics.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:      W,
    completions: Vec<CompletionRow>,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, completions: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Every delivery seen so far, in delivery order.
    pub fn completions(&self) -> &[CompletionRow] {
        &self.completions
    }

    /// Summary over [`completions`][Self::completions]; `None` before the
    /// first delivery.
    pub fn statistics(&self, door_open_ticks: u32) -> Option<WaitStatistics> {
        WaitStatistics::from_rows(&self.completions, door_open_ticks)
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for OutputObserver<W> {
    fn on_delivery(&mut self, _tick: Tick, car: CarId, request: &Request) {
        let Some(row) = CompletionRow::from_request(car, request) else {
            return;
        };
        let result = self.writer.write_completion(&row);
        self.store_err(result);
        self.completions.push(row);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[Car]) {
        let rows: Vec<CarPositionRow> =
            cars.iter().map(|car| CarPositionRow::from_car(tick, car)).collect();

        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
        info!("output closed at {final_tick} after {} completions", self.completions.len());
    }
}
