//! Travel requests and their pickup/delivery lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//! submitted ──(car halts at origin)──► taken ──(car halts at destination)──► satisfied
//! ```
//!
//! Both transitions happen at most once, in that order.  The timestamps double
//! as the flags: a request is *taken* once `picked_up_at` is set and
//! *satisfied* once `arrived_at` is set.

use std::fmt;

use lift_core::{Direction, Floor, LiftError, LiftResult, RequestId, Tick};

use crate::{ScheduleError, ScheduleResult};

// ── Trip ──────────────────────────────────────────────────────────────────────

/// The immutable part of a request, copied into car schedules.
///
/// Carrying origin and destination inline lets the cost functions inspect a
/// car's pending work without a lookup into the request store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub request:     RequestId,
    pub origin:      Floor,
    pub destination: Floor,
}

impl Trip {
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::toward(self.origin, self.destination)
    }

    /// Floors travelled between boarding and alighting.
    #[inline]
    pub fn length(&self) -> u32 {
        self.origin.distance(self.destination)
    }
}

// ── Request ───────────────────────────────────────────────────────────────────

/// One passenger's travel request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    id:           RequestId,
    origin:       Floor,
    destination:  Floor,
    requested_at: Tick,
    picked_up_at: Option<Tick>,
    arrived_at:   Option<Tick>,
}

impl Request {
    /// Create a request stamped at `requested_at`.
    ///
    /// Fails with [`LiftError::SameFloor`] when origin equals destination.
    /// Range checks are the building's job.
    pub fn new(
        id:           RequestId,
        origin:       Floor,
        destination:  Floor,
        requested_at: Tick,
    ) -> LiftResult<Self> {
        if origin == destination {
            return Err(LiftError::SameFloor(origin));
        }
        Ok(Self {
            id,
            origin,
            destination,
            requested_at,
            picked_up_at: None,
            arrived_at:   None,
        })
    }

    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn origin(&self) -> Floor {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    #[inline]
    pub fn requested_at(&self) -> Tick {
        self.requested_at
    }

    #[inline]
    pub fn picked_up_at(&self) -> Option<Tick> {
        self.picked_up_at
    }

    #[inline]
    pub fn arrived_at(&self) -> Option<Tick> {
        self.arrived_at
    }

    /// A car has stopped at the origin and scheduled the destination.
    #[inline]
    pub fn is_taken(&self) -> bool {
        self.picked_up_at.is_some()
    }

    /// The passenger has been delivered.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.arrived_at.is_some()
    }

    #[inline]
    pub fn trip(&self) -> Trip {
        Trip { request: self.id, origin: self.origin, destination: self.destination }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.trip().direction()
    }

    /// Record the pickup at `now`.
    pub fn mark_taken(&mut self, now: Tick) -> ScheduleResult<()> {
        if self.is_taken() {
            return Err(self.lifecycle("already picked up"));
        }
        if now < self.requested_at {
            return Err(self.lifecycle("pickup precedes the request"));
        }
        self.picked_up_at = Some(now);
        Ok(())
    }

    /// Record the delivery at `now`.  Only valid after [`mark_taken`][Self::mark_taken].
    pub fn mark_delivered(&mut self, now: Tick) -> ScheduleResult<()> {
        let Some(picked) = self.picked_up_at else {
            return Err(self.lifecycle("delivered before pickup"));
        };
        if self.is_satisfied() {
            return Err(self.lifecycle("already delivered"));
        }
        if now < picked {
            return Err(self.lifecycle("delivery precedes pickup"));
        }
        self.arrived_at = Some(now);
        Ok(())
    }

    fn lifecycle(&self, reason: &'static str) -> ScheduleError {
        ScheduleError::Lifecycle { request: self.id, reason }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request {} ({} to {})", self.id.0, self.origin, self.destination)
    }
}
