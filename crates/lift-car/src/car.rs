//! The `Car` struct: stop management, door timer, and the per-tick scan.

use log::{debug, trace};

use lift_core::{CarId, Direction, Floor, FloorRange};
use lift_schedule::{StopEntry, StopSchedule, Trip};

use crate::{CarState, CarStep};

/// Consecutive idle ticks before an idle car repositions to a bound floor.
pub const PARK_AFTER_IDLE_TICKS: u32 = 5;

/// One elevator car.
///
/// The car never leaves its building's [`FloorRange`]: it only moves toward a
/// scheduled stop, and stops are always inside the range.
#[derive(Clone, Debug)]
pub struct Car {
    id:              CarId,
    floor:           Floor,
    state:           CarState,
    schedule:        StopSchedule,
    range:           FloorRange,
    door_open_ticks: u32,
}

impl Car {
    /// An idle car with an empty schedule at `floor`.
    pub fn new(id: CarId, floor: Floor, range: FloorRange, door_open_ticks: u32) -> Self {
        debug_assert!(range.contains(floor));
        Self {
            id,
            floor,
            state: CarState::IDLE,
            schedule: StopSchedule::new(),
            range,
            door_open_ticks,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn state(&self) -> CarState {
        self.state
    }

    #[inline]
    pub fn schedule(&self) -> &StopSchedule {
        &self.schedule
    }

    #[inline]
    pub fn range(&self) -> FloorRange {
        self.range
    }

    /// Configured door-open duration.
    #[inline]
    pub fn door_open_ticks(&self) -> u32 {
        self.door_open_ticks
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    #[inline]
    pub fn is_door_open(&self) -> bool {
        self.state.is_door_open()
    }

    #[inline]
    pub fn heading(&self) -> Option<Direction> {
        self.state.heading()
    }

    #[inline]
    pub fn door_remaining(&self) -> u32 {
        self.state.door_remaining()
    }

    /// Consecutive idle ticks so far; 0 unless idle.
    pub fn idle_ticks(&self) -> u32 {
        match self.state {
            CarState::Idle { idle_ticks } => idle_ticks,
            _ => 0,
        }
    }

    // ── Stop management ───────────────────────────────────────────────────

    /// Append `entry` to the stop at `floor`.
    pub fn add_stop(&mut self, floor: Floor, entry: StopEntry) {
        debug_assert!(self.range.contains(floor));
        self.schedule.add(floor, entry);
    }

    /// Pick the heading for a car leaving idle for its first stop.
    ///
    /// Heads for `start` when it differs from the current floor, otherwise
    /// for `destination`.
    pub fn set_initial_direction(&mut self, start: Floor, destination: Floor) {
        let target = if start != self.floor { start } else { destination };
        let direction = Direction::toward(self.floor, target);
        trace!("{} leaves idle heading {direction}", self.id);
        self.state = CarState::Moving(direction);
    }

    /// Schedule the pickup for `trip`.  Returns `true` if the car was idle
    /// and has now started moving.
    pub fn accept(&mut self, trip: Trip) -> bool {
        self.add_stop(trip.origin, StopEntry::Pickup(trip));
        if self.is_moving() {
            return false;
        }
        self.set_initial_direction(trip.origin, trip.destination);
        true
    }

    /// Remove and return the entries scheduled at the current floor.
    pub fn take_stop_here(&mut self) -> Option<Vec<StopEntry>> {
        self.schedule.take(self.floor)
    }

    // ── Door ──────────────────────────────────────────────────────────────

    /// Open the door for the configured duration, keeping the heading.
    ///
    /// With a zero duration the car stays `Moving` and may leave this tick.
    pub fn open_door(&mut self) {
        let direction = self.state.heading().unwrap_or(Direction::Up);
        self.state = if self.door_open_ticks == 0 {
            CarState::Moving(direction)
        } else {
            CarState::DoorOpen { remaining: self.door_open_ticks, direction }
        };
    }

    /// Count the door down by one tick; resume moving when it reaches zero.
    pub fn tick_door(&mut self) {
        if let CarState::DoorOpen { remaining, direction } = self.state {
            self.state = match remaining.saturating_sub(1) {
                0 => CarState::Moving(direction),
                left => CarState::DoorOpen { remaining: left, direction },
            };
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance one tick.
    ///
    /// Stops at the current floor must already have been resolved by the
    /// caller, so a non-empty schedule always has a stop away from here.
    pub fn advance(&mut self) -> CarStep {
        let state = self.state;
        let direction = match state {
            CarState::DoorOpen { .. } => return CarStep::Held,
            CarState::Idle { idle_ticks } if self.schedule.is_empty() => {
                return self.wait(idle_ticks.saturating_add(1));
            }
            CarState::Moving(_) if self.schedule.is_empty() => return self.wait(1),
            CarState::Moving(direction) => direction,
            CarState::Idle { .. } => {
                // Stops were added with `add_stop` instead of `accept`.
                let nearest = self
                    .schedule
                    .iter()
                    .map(|(f, _)| f)
                    .min_by_key(|f| f.distance(self.floor))
                    .unwrap_or(self.floor);
                self.set_initial_direction(nearest, nearest);
                self.state.heading().unwrap_or(Direction::Up)
            }
        };
        self.scan(direction)
    }

    /// Move one floor toward the furthest stop in `direction`, or turn around.
    fn scan(&mut self, direction: Direction) -> CarStep {
        let ahead = match direction {
            Direction::Up => {
                self.floor < self.range.max()
                    && self.schedule.highest().is_some_and(|top| self.floor < top)
            }
            Direction::Down => {
                self.floor > self.range.min()
                    && self.schedule.lowest().is_some_and(|bottom| self.floor > bottom)
            }
        };

        if ahead {
            self.floor = self.floor.step(direction);
            trace!("{} moved {direction} to floor {}", self.id, self.floor);
            CarStep::Moved(self.floor)
        } else {
            let reversed = direction.reverse();
            self.state = CarState::Moving(reversed);
            trace!("{} turns {reversed} at floor {}", self.id, self.floor);
            CarStep::Reversed(reversed)
        }
    }

    /// Empty schedule: count idle time and park at the nearer bound on timeout.
    fn wait(&mut self, idle_ticks: u32) -> CarStep {
        if idle_ticks >= PARK_AFTER_IDLE_TICKS && !self.range.is_extreme(self.floor) {
            let target = self.range.nearer_extreme(self.floor);
            self.schedule.add(target, StopEntry::Parking);
            self.state = CarState::Moving(Direction::toward(self.floor, target));
            debug!("{} idle for {idle_ticks} ticks, parking at floor {target}", self.id);
            return CarStep::Parking(target);
        }
        self.state = CarState::Idle { idle_ticks };
        CarStep::Idle
    }
}
