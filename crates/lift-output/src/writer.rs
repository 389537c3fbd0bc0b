//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarPositionRow, CompletionRow, OutputResult};

/// Sink for completion and position rows.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one delivered request.
    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()>;

    /// Write a batch of car positions.
    fn write_positions(&mut self, rows: &[CarPositionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
