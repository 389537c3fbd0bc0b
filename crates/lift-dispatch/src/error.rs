use lift_core::{LiftError, RequestId, Tick};
use lift_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid input: {0}")]
    Invalid(#[from] LiftError),

    #[error("request lifecycle error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("initial floors length {got} does not match car count {expected}")]
    CarCountMismatch { expected: usize, got: usize },

    #[error("{0} is scheduled on a car but not tracked as in flight")]
    UnknownRequest(RequestId),

    #[error("tick limit reached at {0} with requests still in flight")]
    TickLimit(Tick),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
