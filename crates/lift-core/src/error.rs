//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`, so validation failures raised here surface
//! unchanged at the dispatcher boundary.

use thiserror::Error;

use crate::{Floor, Tick};

/// Validation errors for configuration and inbound requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("floor {floor} is outside the building range [{min}, {max}]")]
    FloorOutOfRange { floor: Floor, min: Floor, max: Floor },

    #[error("request origin and destination are both {0}")]
    SameFloor(Floor),

    #[error("request tagged {tick} arrived after the clock reached {now}")]
    TickInPast { tick: Tick, now: Tick },
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
