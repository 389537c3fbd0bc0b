use lift_core::{RequestId, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("request stream parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record {record} is tagged {tick}, earlier than the previous record at {previous}")]
    NonMonotonic { record: usize, tick: Tick, previous: Tick },

    #[error("{request} cannot change state: {reason}")]
    Lifecycle { request: RequestId, reason: &'static str },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
