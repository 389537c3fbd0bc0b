//! Replay a recorded request stream through a dispatcher.

use log::info;

use lift_core::Tick;
use lift_schedule::RequestRecord;

use crate::{DispatchObserver, DispatchResult, Dispatcher};

/// Outcome of [`replay`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Records submitted.
    pub submitted:  usize,
    /// Tick at which the last car went idle.
    pub final_tick: Tick,
}

/// Submit every record at its tick, then run until every request is
/// delivered.
///
/// `records` must be in non-decreasing tick order, as
/// [`load_requests_csv`][lift_schedule::load_requests_csv] guarantees.  The
/// first invalid record aborts the replay.
pub fn replay<O: DispatchObserver>(
    dispatcher: &mut Dispatcher,
    records:    &[RequestRecord],
    observer:   &mut O,
) -> DispatchResult<ReplaySummary> {
    for record in records {
        dispatcher.submit_at(record.tick, record.origin, record.destination, observer)?;
    }
    info!("{} requests submitted by {}", records.len(), dispatcher.clock());

    let final_tick = dispatcher.run_until_idle(observer)?;
    Ok(ReplaySummary { submitted: records.len(), final_tick })
}
