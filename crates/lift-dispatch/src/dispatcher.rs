//! The `Dispatcher` struct and its tick loop.

use log::{debug, info, trace, warn};

use lift_car::Car;
use lift_core::{BuildingConfig, Floor, IdAllocator, LiftError, RequestId, SimClock, Tick};
use lift_schedule::{Request, StopEntry, Trip};

use crate::{Building, DispatchError, DispatchObserver, DispatchResult, cost};

/// Request store keyed by id.
#[cfg(not(feature = "fx-hash"))]
pub type RequestMap = std::collections::HashMap<RequestId, Request>;

/// Request store keyed by id.
#[cfg(feature = "fx-hash")]
pub type RequestMap = rustc_hash::FxHashMap<RequestId, Request>;

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Owns the building, the clock, and every request, and drives the tick loop.
///
/// A request lives in exactly one of two stores: `current` from submission
/// until its drop-off, then `satisfied`.  While no car can take it, its id is
/// also parked in the waiting list and re-offered at the end of every tick.
///
/// Create via [`DispatcherBuilder`][crate::DispatcherBuilder].
pub struct Dispatcher {
    config:      BuildingConfig,
    building:    Building,
    clock:       SimClock,
    request_ids: IdAllocator<RequestId>,
    waiting:     Vec<RequestId>,
    current:     RequestMap,
    satisfied:   RequestMap,
}

impl Dispatcher {
    pub(crate) fn new(config: BuildingConfig, building: Building) -> Self {
        Self {
            config,
            building,
            clock:       SimClock::new(),
            request_ids: IdAllocator::new(),
            waiting:     Vec::new(),
            current:     RequestMap::default(),
            satisfied:   RequestMap::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> Tick {
        self.clock.now()
    }

    #[inline]
    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    #[inline]
    pub fn building(&self) -> &Building {
        &self.building
    }

    #[inline]
    pub fn cars(&self) -> &[Car] {
        self.building.cars()
    }

    /// Requests no car has accepted yet, oldest first.
    #[inline]
    pub fn waiting(&self) -> &[RequestId] {
        &self.waiting
    }

    /// Requests submitted but not yet delivered.
    #[inline]
    pub fn current(&self) -> &RequestMap {
        &self.current
    }

    /// Delivered requests.
    #[inline]
    pub fn satisfied(&self) -> &RequestMap {
        &self.satisfied
    }

    /// Look a request up in either store.
    pub fn request(&self, id: RequestId) -> Option<&Request> {
        self.current.get(&id).or_else(|| self.satisfied.get(&id))
    }

    /// Number of requests accepted so far.
    #[inline]
    pub fn submitted(&self) -> u64 {
        self.request_ids.issued()
    }

    /// Delivered requests in submission order.
    pub fn completions(&self) -> Vec<&Request> {
        let mut done: Vec<&Request> = self.satisfied.values().collect();
        done.sort_unstable_by_key(|r| r.id());
        done
    }

    /// `true` while any request is submitted but not yet delivered.
    ///
    /// Parking moves do not count.
    #[inline]
    pub fn is_busy(&self) -> bool {
        !self.current.is_empty()
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Register a request stamped at the current tick and offer it to the
    /// cars.
    ///
    /// Rejected requests are not stored and consume no id.
    pub fn submit(&mut self, origin: Floor, destination: Floor) -> DispatchResult<RequestId> {
        self.validate(origin, destination)?;

        let now = self.clock.now();
        let id = self.request_ids.allocate();
        let request = Request::new(id, origin, destination, now)?;
        let trip = request.trip();
        debug!("{now}: {request} submitted");
        self.current.insert(id, request);
        if !self.assign(trip) {
            warn!("request {} has no feasible car, waiting", id.0);
            self.waiting.push(id);
        }
        Ok(id)
    }

    /// Step the clock up to `tick`, then [`submit`][Self::submit].
    ///
    /// Invalid floors are rejected before the clock moves.
    pub fn submit_at<O: DispatchObserver>(
        &mut self,
        tick:        Tick,
        origin:      Floor,
        destination: Floor,
        observer:    &mut O,
    ) -> DispatchResult<RequestId> {
        let now = self.clock.now();
        if tick < now {
            return Err(LiftError::TickInPast { tick, now }.into());
        }
        self.validate(origin, destination)?;

        while self.clock.now() < tick {
            self.next_step(observer)?;
        }
        self.submit(origin, destination)
    }

    fn validate(&self, origin: Floor, destination: Floor) -> DispatchResult<()> {
        let range = self.building.range();
        range.check(origin)?;
        range.check(destination)?;
        if origin == destination {
            return Err(LiftError::SameFloor(origin).into());
        }
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn next_step<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<()> {
        let now = self.clock.now();
        observer.on_tick_start(now);

        // ── Phase 1: cars, in ascending index ─────────────────────────────
        for index in 0..self.building.car_count() {
            if self.building.cars()[index].is_door_open() {
                self.building.cars_mut()[index].tick_door();
                continue;
            }
            self.check_stop(index, now, observer)?;
            self.building.cars_mut()[index].advance();
        }

        // ── Phase 2: re-offer waiting requests ────────────────────────────
        self.assign_waiting();

        // ── Phase 3: notify and advance the clock ─────────────────────────
        observer.on_tick_end(now, self.waiting.len());
        if now.0.is_multiple_of(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(now, self.building.cars());
        }
        self.clock.advance();
        Ok(())
    }

    /// Step until every submitted request has been delivered.
    ///
    /// Returns the final tick.  Fails with [`DispatchError::TickLimit`] if
    /// `config.max_ticks` is set and reached first.
    pub fn run_until_idle<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<Tick> {
        let limit = self.config.tick_limit();
        while self.is_busy() {
            let now = self.clock.now();
            if limit.is_some_and(|limit| now >= limit) {
                return Err(DispatchError::TickLimit(now));
            }
            self.next_step(observer)?;
        }

        let end = self.clock.now();
        info!(
            "all {} requests delivered by {end} ({} cars)",
            self.satisfied.len(),
            self.building.car_count(),
        );
        observer.on_sim_end(end);
        Ok(end)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Resolve the stop at car `index`'s floor, if any, and open its door.
    fn check_stop<O: DispatchObserver>(
        &mut self,
        index:    usize,
        now:      Tick,
        observer: &mut O,
    ) -> DispatchResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let car       = &mut self.building.cars_mut()[index];
        let current   = &mut self.current;
        let satisfied = &mut self.satisfied;

        let Some(entries) = car.take_stop_here() else {
            return Ok(());
        };
        let car_id = car.id();

        for entry in entries {
            match entry {
                StopEntry::Parking => {
                    trace!("{now}: {car_id} parked at floor {}", car.floor());
                }

                StopEntry::Pickup(trip) => {
                    let request = current
                        .get_mut(&trip.request)
                        .ok_or(DispatchError::UnknownRequest(trip.request))?;
                    request.mark_taken(now)?;
                    car.add_stop(trip.destination, StopEntry::Dropoff(trip));
                    debug!("{now}: {car_id} picked up {request}");
                    observer.on_pickup(now, car_id, request);
                }

                StopEntry::Dropoff(trip) => {
                    let mut request = current
                        .remove(&trip.request)
                        .ok_or(DispatchError::UnknownRequest(trip.request))?;
                    request.mark_delivered(now)?;
                    debug!("{now}: {car_id} delivered {request}");
                    observer.on_delivery(now, car_id, &request);
                    satisfied.insert(trip.request, request);
                }
            }
        }

        car.open_door();
        Ok(())
    }

    /// Give `trip` to the cheapest feasible car.  Returns `false` if no car
    /// can take it.
    fn assign(&mut self, trip: Trip) -> bool {
        let Some((index, delay)) =
            cost::select_car(self.building.cars(), trip.origin, trip.destination)
        else {
            return false;
        };
        let car = &mut self.building.cars_mut()[index];
        let started = car.accept(trip);
        debug!(
            "request {} assigned to {} (delay {delay}{})",
            trip.request.0,
            car.id(),
            if started { ", leaving idle" } else { "" },
        );
        true
    }

    /// Re-offer every waiting request once, oldest first.
    fn assign_waiting(&mut self) {
        if self.waiting.is_empty() {
            return;
        }
        for id in std::mem::take(&mut self.waiting) {
            let Some(trip) = self.current.get(&id).map(Request::trip) else {
                continue;
            };
            if !self.assign(trip) {
                self.waiting.push(id);
            }
        }
        if !self.waiting.is_empty() {
            trace!("{} requests still waiting", self.waiting.len());
        }
    }
}
