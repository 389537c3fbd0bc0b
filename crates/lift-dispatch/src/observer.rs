//! Dispatcher observer trait for progress reporting and data collection.

use lift_car::Car;
use lift_core::{CarId, Tick};
use lift_schedule::Request;

/// Callbacks invoked by the [`Dispatcher`][crate::Dispatcher] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Delivered(usize);
///
/// impl DispatchObserver for Delivered {
///     fn on_delivery(&mut self, _tick: Tick, _car: CarId, _request: &Request) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called at the very start of each tick, before any car acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A car halted at a request's origin and scheduled its destination.
    fn on_pickup(&mut self, _tick: Tick, _car: CarId, _request: &Request) {}

    /// A car delivered a request.  `request` carries all three timestamps.
    fn on_delivery(&mut self, _tick: Tick, _car: CarId, _request: &Request) {}

    /// Called at the end of each tick, after assignment.
    ///
    /// `waiting` is the number of requests no car has accepted yet.
    fn on_tick_end(&mut self, _tick: Tick, _waiting: usize) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to every car, so position writers need no dispatcher access.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &[Car]) {}

    /// Called once when a run completes (see [`replay`][crate::replay] and
    /// [`Dispatcher::run_until_idle`][crate::Dispatcher::run_until_idle]).
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
