//! Fluent builder for constructing a [`Dispatcher`].

use lift_core::{BuildingConfig, Floor};

use crate::{Building, DispatchError, DispatchResult, Dispatcher};

/// Fluent builder for [`Dispatcher`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                  |
/// |------------------------|------------------------------------------|
/// | `.initial_floors(v)`   | Every car at `config.initial_floor`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = DispatcherBuilder::new(config)
///     .initial_floors(vec![Floor(0), Floor(20)])
///     .build()?;
/// dispatcher.submit(Floor(3), Floor(7))?;
/// dispatcher.run_until_idle(&mut NoopObserver)?;
/// ```
pub struct DispatcherBuilder {
    config:         BuildingConfig,
    initial_floors: Option<Vec<Floor>>,
}

impl DispatcherBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self { config, initial_floors: None }
    }

    /// Supply the start floor of each car (must be length `car_count`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate the configuration, place the cars, and return a dispatcher
    /// at tick zero.
    pub fn build(self) -> DispatchResult<Dispatcher> {
        let range = self.config.validate()?;
        let car_count = self.config.car_count;

        let floors = match self.initial_floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(DispatchError::CarCountMismatch {
                        expected: car_count,
                        got:      f.len(),
                    });
                }
                f
            }
            None => vec![self.config.initial_floor; car_count],
        };

        let building = Building::new(range, self.config.door_open_ticks, &floors)?;
        log::info!(
            "building {range} with {car_count} cars, door open {} ticks",
            self.config.door_open_ticks,
        );
        Ok(Dispatcher::new(self.config, building))
    }
}
