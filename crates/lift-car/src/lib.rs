//! `lift-car` — one elevator car: position, door, and stop scan.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`state`]   | `CarState` machine, `CarStep` outcome of one advance  |
//! | [`car`]     | `Car`: floor, state, and `StopSchedule`               |
//!
//! # Motion model (one floor per tick)
//!
//! ```text
//!            accept()               open_door()
//!   Idle ───────────────► Moving ───────────────► DoorOpen { remaining }
//!    ▲  ◄─────────────────  │  ◄────────────────────  │
//!    │   schedule empty     │     tick_door() hits 0  │
//!    └──── advance() parks after PARK_AFTER_IDLE_TICKS idle ticks
//! ```
//!
//! A moving car travels one floor per `advance()` toward the furthest stop in
//! its direction, and reverses when nothing is left ahead of it.  The door
//! opening and closing are driven from outside (the dispatcher resolves stops
//! before calling `advance()`), so every transition is a single method call.

pub mod car;
pub mod state;


pub use car::{Car, PARK_AFTER_IDLE_TICKS};
pub use state::{CarState, CarStep};
