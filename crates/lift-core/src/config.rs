//! Building and run configuration.
//!
//! Fixed at startup and never reloaded.  Typically loaded from a TOML file by
//! the application crate (with the `serde` feature) and handed to the
//! dispatcher builder, which calls [`BuildingConfig::validate`] before any
//! car is created.

use crate::{Floor, FloorRange, LiftError, LiftResult, Tick};

/// Top-level simulation configuration.
///
/// The defaults reproduce the reference building: floors 0–100, four cars,
/// doors held open for 10 ticks, every car starting at floor 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BuildingConfig {
    /// Highest floor served.
    pub max_floor: Floor,

    /// Lowest floor served.  Must be strictly below `max_floor`.
    pub min_floor: Floor,

    /// Number of cars.  At least one.
    pub car_count: usize,

    /// Ticks a car's door stays open at every stop.  Zero is allowed.
    pub door_open_ticks: u32,

    /// Floor every car starts at unless overridden per car by the builder.
    pub initial_floor: Floor,

    /// Emit a car-position snapshot every N ticks.  1 = every tick.
    pub snapshot_interval_ticks: u64,

    /// Abort `run_until_idle` once the clock reaches this tick.  `None` runs
    /// until every request is delivered.
    pub max_ticks: Option<u64>,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            max_floor:               Floor(100),
            min_floor:               Floor(0),
            car_count:               4,
            door_open_ticks:         10,
            initial_floor:           Floor(1),
            snapshot_interval_ticks: 1,
            max_ticks:               None,
        }
    }
}

impl BuildingConfig {
    /// Check every field and return the validated floor range.
    pub fn validate(&self) -> LiftResult<FloorRange> {
        let range = FloorRange::new(self.min_floor, self.max_floor)?;
        if self.car_count == 0 {
            return Err(LiftError::Config("car_count must be at least 1".into()));
        }
        if !range.contains(self.initial_floor) {
            return Err(LiftError::Config(format!(
                "initial_floor {} is outside {range}",
                self.initial_floor
            )));
        }
        if self.snapshot_interval_ticks == 0 {
            return Err(LiftError::Config(
                "snapshot_interval_ticks must be at least 1".into(),
            ));
        }
        Ok(range)
    }

    /// The tick at which `run_until_idle` gives up, if any.
    #[inline]
    pub fn tick_limit(&self) -> Option<Tick> {
        self.max_ticks.map(Tick)
    }
}
