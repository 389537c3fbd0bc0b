//! Floors, the building's floor range, and travel direction.

use std::fmt;

use crate::{LiftError, LiftResult};

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor number.  Signed so basements below ground level are expressible.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub i32);

impl Floor {
    /// The floor directly above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below.
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0 - 1)
    }

    /// One floor further in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
        }
    }

    /// Number of floors between `self` and `other` (one tick each).
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Travel direction of a car or of a trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`.  Equal floors count as `Down`.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

// ── FloorRange ────────────────────────────────────────────────────────────────

/// The inclusive range of floors a building serves.  Always `min < max`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FloorRange {
    min: Floor,
    max: Floor,
}

impl FloorRange {
    /// Fails unless `min < max`.
    pub fn new(min: Floor, max: Floor) -> LiftResult<Self> {
        if min >= max {
            return Err(LiftError::Config(format!(
                "min_floor ({min}) must be below max_floor ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> Floor {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Floor {
        self.max
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
    }

    /// `Ok(floor)` if inside the range, `FloorOutOfRange` otherwise.
    pub fn check(&self, floor: Floor) -> LiftResult<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::FloorOutOfRange { floor, min: self.min, max: self.max })
        }
    }

    /// `true` at the top or bottom floor.
    #[inline]
    pub fn is_extreme(&self, floor: Floor) -> bool {
        floor == self.min || floor == self.max
    }

    /// The bound closer to `floor`; the bottom floor wins ties.
    pub fn nearer_extreme(&self, floor: Floor) -> Floor {
        let to_top = self.max.distance(floor);
        let to_bottom = floor.distance(self.min);
        if to_top < to_bottom { self.max } else { self.min }
    }

    /// Number of floors served.
    pub fn floor_count(&self) -> u32 {
        self.max.distance(self.min) + 1
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
