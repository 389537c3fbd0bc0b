//! The building: floor range, door duration, and the fixed set of cars.

use lift_car::Car;
use lift_core::{BuildingConfig, CarId, Floor, FloorRange, IdAllocator, LiftError};

use crate::{DispatchError, DispatchResult};

/// Static building configuration plus its cars.
///
/// Created once before the simulation starts; afterwards only the cars
/// change.
#[derive(Clone, Debug)]
pub struct Building {
    range:           FloorRange,
    door_open_ticks: u32,
    cars:            Vec<Car>,
    car_ids:         IdAllocator<CarId>,
}

impl Building {
    /// One car per entry of `initial_floors`, ids allocated in order.
    ///
    /// Fails if there are no cars or a start floor is outside `range`.
    pub fn new(
        range:           FloorRange,
        door_open_ticks: u32,
        initial_floors:  &[Floor],
    ) -> DispatchResult<Self> {
        if initial_floors.is_empty() {
            return Err(LiftError::Config("a building needs at least one car".into()).into());
        }

        let mut car_ids = IdAllocator::new();
        let cars = initial_floors
            .iter()
            .map(|&floor| {
                range.check(floor)?;
                Ok(Car::new(car_ids.allocate(), floor, range, door_open_ticks))
            })
            .collect::<Result<Vec<_>, LiftError>>()?;

        Ok(Self { range, door_open_ticks, cars, car_ids })
    }

    /// Validate `config` and place every car at `config.initial_floor`.
    pub fn from_config(config: &BuildingConfig) -> DispatchResult<Self> {
        let range = config.validate().map_err(DispatchError::Invalid)?;
        Self::new(range, config.door_open_ticks, &vec![config.initial_floor; config.car_count])
    }

    #[inline]
    pub fn range(&self) -> FloorRange {
        self.range
    }

    #[inline]
    pub fn door_open_ticks(&self) -> u32 {
        self.door_open_ticks
    }

    #[inline]
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    #[inline]
    pub(crate) fn cars_mut(&mut self) -> &mut [Car] {
        &mut self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// Number of car ids handed out; equals [`car_count`][Self::car_count].
    #[inline]
    pub fn ids_issued(&self) -> u64 {
        self.car_ids.issued()
    }
}
