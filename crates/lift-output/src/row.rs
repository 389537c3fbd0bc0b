//! Plain data row types written by output backends.

use lift_car::Car;
use lift_core::{CarId, Tick};
use lift_schedule::Request;

/// One delivered request with all three timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRow {
    pub request_id:   u64,
    pub origin:       i32,
    pub destination:  i32,
    pub requested_at: u64,
    pub picked_up_at: u64,
    pub arrived_at:   u64,
    /// The car that delivered it.
    pub car_id:       u32,
}

impl CompletionRow {
    /// `None` unless `request` has been both picked up and delivered.
    pub fn from_request(car: CarId, request: &Request) -> Option<Self> {
        Some(Self {
            request_id:   request.id().0,
            origin:       request.origin().0,
            destination:  request.destination().0,
            requested_at: request.requested_at().0,
            picked_up_at: request.picked_up_at()?.0,
            arrived_at:   request.arrived_at()?.0,
            car_id:       car.0,
        })
    }

    /// Ticks between the request and the pickup.
    #[inline]
    pub fn wait(&self) -> u64 {
        self.picked_up_at - self.requested_at
    }

    /// Ticks on board beyond a non-stop ride: one tick per floor plus one,
    /// plus a single door opening.
    pub fn delay(&self, door_open_ticks: u32) -> i64 {
        let ride = self.arrived_at as i64 - self.picked_up_at as i64;
        let direct = i64::from(self.origin.abs_diff(self.destination)) + 1;
        ride - direct - i64::from(door_open_ticks)
    }
}

/// Position of one car at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarPositionRow {
    pub tick:   u64,
    pub car_id: u32,
    pub floor:  i32,
    /// `idle`, `up`, `down`, or `door_open`.
    pub state:  &'static str,
}

impl CarPositionRow {
    pub fn from_car(tick: Tick, car: &Car) -> Self {
        Self {
            tick:   tick.0,
            car_id: car.id().0,
            floor:  car.floor().0,
            state:  car.state().label(),
        }
    }
}
