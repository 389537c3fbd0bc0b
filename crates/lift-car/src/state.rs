//! Per-car motion state.

use std::fmt;

use lift_core::{Direction, Floor};

/// The state of a single car.
///
/// Direction survives a door opening: a car that halts mid-journey keeps its
/// heading while the door is open and resumes in the same direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarState {
    /// No stops.  `idle_ticks` counts consecutive idle advances.
    Idle { idle_ticks: u32 },

    /// Travelling (or about to travel) in the given direction.
    Moving(Direction),

    /// Halted with the door open for `remaining` more ticks.
    DoorOpen { remaining: u32, direction: Direction },
}

impl CarState {
    /// Fresh idle state.
    pub const IDLE: CarState = CarState::Idle { idle_ticks: 0 };

    /// `true` unless idle.  A car with its door open is still serving stops.
    #[inline]
    pub fn is_moving(&self) -> bool {
        !matches!(self, CarState::Idle { .. })
    }

    #[inline]
    pub fn is_door_open(&self) -> bool {
        matches!(self, CarState::DoorOpen { .. })
    }

    /// Current heading, `None` while idle.
    #[inline]
    pub fn heading(&self) -> Option<Direction> {
        match *self {
            CarState::Idle { .. } => None,
            CarState::Moving(direction) | CarState::DoorOpen { direction, .. } => Some(direction),
        }
    }

    /// Ticks until the door closes; 0 when closed.
    #[inline]
    pub fn door_remaining(&self) -> u32 {
        match *self {
            CarState::DoorOpen { remaining, .. } => remaining,
            _ => 0,
        }
    }

    /// Short label used in position snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            CarState::Idle { .. } => "idle",
            CarState::Moving(Direction::Up) => "up",
            CarState::Moving(Direction::Down) => "down",
            CarState::DoorOpen { .. } => "door_open",
        }
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarState::Idle { idle_ticks } => write!(f, "idle for {idle_ticks} ticks"),
            CarState::Moving(direction) => write!(f, "moving {direction}"),
            CarState::DoorOpen { remaining, direction } => {
                write!(f, "door open ({remaining} left, heading {direction})")
            }
        }
    }
}

/// What one call to [`Car::advance`][crate::Car::advance] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarStep {
    /// Door open; no positional change.
    Held,
    /// Nothing scheduled; the car waits in place.
    Idle,
    /// Idle timeout: a parking stop was added at this floor.
    Parking(Floor),
    /// Travelled one floor, now at this floor.
    Moved(Floor),
    /// Nothing left ahead; turned around in place.
    Reversed(Direction),
}
