//! Car-selection cost function.
//!
//! Every function here is pure over a `&Car` snapshot: nothing is mutated,
//! and the request store is never consulted because pending pickups carry
//! their trip inline.
//!
//! # Heuristic
//!
//! The global delay of giving a request to a car is
//!
//! ```text
//! global_delay = extra_time       (how long this passenger is held up)
//!              + extra_time_added (how long everyone already on the car is held up)
//! ```
//!
//! Both terms count one door-open duration per extra halt.  The two terms
//! overlap for some stops, so a halt can be charged twice.  The estimate is
//! approximate on purpose and assignment decisions depend on it exactly as
//! written.

use lift_car::Car;
use lift_core::{Direction, Floor};
use lift_schedule::StopEntry;

/// `true` if `x` lies strictly between `a` and `b`, in either order.
#[inline]
fn strictly_between(x: Floor, a: Floor, b: Floor) -> bool {
    (a < x && x < b) || (b < x && x < a)
}

/// `true` if `s` lies past `x` when travelling in `heading`.
#[inline]
fn beyond(s: Floor, x: Floor, heading: Direction) -> bool {
    match heading {
        Direction::Up => s > x,
        Direction::Down => s < x,
    }
}

/// Door halts for not-yet-boarded passengers at `entries` who travel in
/// `heading` and alight strictly between the car and `dest`.
fn pending_detours(car: &Car, entries: &[StopEntry], heading: Direction, dest: Floor) -> u32 {
    let n = entries
        .iter()
        .filter_map(StopEntry::pending_pickup)
        .filter(|t| t.direction() == heading && strictly_between(t.destination, car.floor(), dest))
        .count() as u32;
    n * car.door_open_ticks()
}

/// Ticks until the passenger `start → dest` would be picked up by `car`,
/// including door halts on the way.  `None` if the car cannot take the
/// request without reversing past `start`.
///
/// An idle car can take anything.  A moving car only takes requests in its
/// own direction whose origin it has not passed yet.
pub fn extra_time(car: &Car, start: Floor, dest: Floor) -> Option<u32> {
    let floor = car.floor();
    let door = car.door_open_ticks();
    let mut time = 0;

    if let Some(heading) = car.heading() {
        if Direction::toward(start, dest) != heading {
            return None;
        }
        let passed = match heading {
            Direction::Up => start < floor,
            Direction::Down => start > floor,
        };
        if passed {
            return None;
        }

        for (s, entries) in car.schedule().iter() {
            // The halt at `start` is the pickup itself, not a delay.
            if s != start && strictly_between(s, floor, dest) {
                time += door;
            }
            time += pending_detours(car, entries, heading, dest);
        }
    }

    Some(time + car.door_remaining() + floor.distance(start))
}

/// Ticks of extra door time the new request imposes on stops the car already
/// has.  Zero for an idle car.
pub fn extra_time_added(car: &Car, start: Floor, dest: Floor) -> u32 {
    let Some(heading) = car.heading() else {
        return 0;
    };
    let door = car.door_open_ticks();
    let schedule = car.schedule();
    let new_dest_halt = !schedule.contains(dest);
    let new_start_halt = !schedule.contains(start);

    schedule
        .iter()
        .map(|(s, entries)| {
            let mut time = 0;
            if new_dest_halt && beyond(s, dest, heading) {
                time += door;
            }
            if new_start_halt && beyond(s, start, heading) {
                time += door;
            }
            time + pending_detours(car, entries, heading, dest)
        })
        .sum()
}

/// `extra_time + extra_time_added`, or `None` if infeasible.
pub fn global_delay(car: &Car, start: Floor, dest: Floor) -> Option<u32> {
    extra_time(car, start, dest).map(|t| t + extra_time_added(car, start, dest))
}

/// Index and delay of the car with the strictly smallest global delay.
/// The lowest index wins ties.  `None` if no car can take the request.
pub fn select_car(cars: &[Car], start: Floor, dest: Floor) -> Option<(usize, u32)> {
    cars.iter()
        .enumerate()
        .filter_map(|(i, car)| global_delay(car, start, dest).map(|d| (i, d)))
        .min_by_key(|&(_, delay)| delay)
}
