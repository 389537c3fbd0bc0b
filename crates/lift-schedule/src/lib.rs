//! `lift-schedule` — travel requests, stop schedules, and request streams.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`request`]   | `Request` lifecycle, `Trip`                               |
//! | [`stops`]     | `StopEntry`, `StopSchedule` (`BTreeMap<Floor, Vec<StopEntry>>`) |
//! | [`loader`]    | `RequestRecord`, `load_requests_csv`, `load_requests_reader` |
//! | [`generator`] | `TrafficProfile`, `generate_requests`                     |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Stop model (summary)
//!
//! Every car owns a `StopSchedule`.  Keys are floors; each key holds the
//! entries the car must resolve when it halts there:
//!
//! ```text
//! Parking        → reposition only, nothing to board or deliver
//! Pickup(trip)   → board trip.request at trip.origin
//! Dropoff(trip)  → deliver trip.request at trip.destination
//! ```
//!
//! A car moving up walks the keys in ascending order, a car moving down in
//! descending order.

pub mod error;
pub mod generator;
pub mod loader;
pub mod request;
pub mod stops;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use generator::{TrafficProfile, generate_requests};
pub use loader::{RequestRecord, load_requests_csv, load_requests_reader};
pub use request::{Request, Trip};
pub use stops::{StopEntry, StopSchedule};
