//! `lift-core` — foundational types for the `rust_lift` dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`, `RequestId`, `IdAllocator`                   |
//! | [`floor`]       | `Floor`, `FloorRange`, `Direction`                    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `BuildingConfig`                                      |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `BuildingConfig` from a TOML file.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor, FloorRange};
pub use ids::{CarId, IdAllocator, RequestId};
pub use time::{SimClock, Tick};
