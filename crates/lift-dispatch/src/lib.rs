//! `lift-dispatch` — building, cost function, and tick loop for the rust_lift
//! simulator.
//!
//! # Three-phase tick
//!
//! ```text
//! each call to Dispatcher::next_step:
//!   ① Cars     : in ascending car index:
//!                  door open  → count the door down
//!                  otherwise  → resolve the stop at this floor
//!                               (pickups schedule their drop-off,
//!                                drop-offs complete their request),
//!                               then advance one floor / turn / park
//!   ② Assign   : re-offer every request still waiting for a car
//!   ③ Clock    : notify the observer, advance one tick
//! ```
//!
//! Requests enter between ticks through [`Dispatcher::submit`] (stamped at
//! the current tick) or [`Dispatcher::submit_at`], which first steps the
//! clock up to the request's tick.  [`replay`] drives a whole recorded
//! stream and then runs until every request is delivered.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the request maps.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::BuildingConfig;
//! use lift_dispatch::{DispatcherBuilder, NoopObserver, replay};
//!
//! let mut dispatcher = DispatcherBuilder::new(BuildingConfig::default()).build()?;
//! let summary = replay(&mut dispatcher, &records, &mut NoopObserver)?;
//! println!("{} requests delivered by {}", summary.submitted, summary.final_tick);
//! ```

pub mod builder;
pub mod building;
pub mod cost;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod replay;


pub use builder::DispatcherBuilder;
pub use building::Building;
pub use dispatcher::{Dispatcher, RequestMap};
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use replay::{ReplaySummary, replay};
