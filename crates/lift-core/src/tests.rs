//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, IdAllocator, RequestId};

    #[test]
    fn allocator_counts_from_zero() {
        let mut ids = IdAllocator::<CarId>::new();
        assert_eq!(ids.allocate(), CarId(0));
        assert_eq!(ids.allocate(), CarId(1));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn allocators_are_independent() {
        let mut a = IdAllocator::<RequestId>::new();
        let mut b = IdAllocator::<RequestId>::new();
        a.allocate();
        a.allocate();
        assert_eq!(b.allocate(), RequestId(0));
        assert_eq!(a.allocate(), RequestId(2));
    }

    #[test]
    fn ordering_and_index() {
        assert!(RequestId(3) < RequestId(4));
        assert_eq!(CarId(7).index(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(2).to_string(), "CarId(2)");
        assert_eq!(RequestId(11).to_string(), "RequestId(11)");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor, FloorRange, LiftError};

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(7)), 4);
        assert_eq!(Floor(7).distance(Floor(3)), 4);
        assert_eq!(Floor(-2).distance(Floor(2)), 4);
    }

    #[test]
    fn step_follows_direction() {
        assert_eq!(Floor(4).step(Direction::Up), Floor(5));
        assert_eq!(Floor(4).step(Direction::Down), Floor(3));
    }

    #[test]
    fn toward_and_reverse() {
        assert_eq!(Direction::toward(Floor(1), Floor(5)), Direction::Up);
        assert_eq!(Direction::toward(Floor(5), Floor(1)), Direction::Down);
        assert_eq!(Direction::Up.reverse(), Direction::Down);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(FloorRange::new(Floor(5), Floor(5)).is_err());
        assert!(FloorRange::new(Floor(6), Floor(5)).is_err());
        assert!(FloorRange::new(Floor(-3), Floor(5)).is_ok());
    }

    #[test]
    fn check_reports_bounds() {
        let range = FloorRange::new(Floor(0), Floor(10)).unwrap();
        assert_eq!(range.check(Floor(10)), Ok(Floor(10)));
        assert_eq!(
            range.check(Floor(11)),
            Err(LiftError::FloorOutOfRange { floor: Floor(11), min: Floor(0), max: Floor(10) })
        );
    }

    #[test]
    fn nearer_extreme_prefers_bottom_on_ties() {
        let range = FloorRange::new(Floor(0), Floor(10)).unwrap();
        assert_eq!(range.nearer_extreme(Floor(2)), Floor(0));
        assert_eq!(range.nearer_extreme(Floor(8)), Floor(10));
        assert_eq!(range.nearer_extreme(Floor(5)), Floor(0));
        assert!(range.is_extreme(Floor(0)));
        assert!(!range.is_extreme(Floor(1)));
        assert_eq!(range.floor_count(), 11);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }

    #[test]
    fn clock_advances_one_tick() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), Tick(2));
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, Floor, LiftError};

    #[test]
    fn defaults_match_reference_building() {
        let cfg = BuildingConfig::default();
        let range = cfg.validate().unwrap();
        assert_eq!(range.min(), Floor(0));
        assert_eq!(range.max(), Floor(100));
        assert_eq!(cfg.car_count, 4);
        assert_eq!(cfg.door_open_ticks, 10);
        assert_eq!(cfg.tick_limit(), None);
    }

    #[test]
    fn zero_cars_rejected() {
        let cfg = BuildingConfig { car_count: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn inverted_floors_rejected() {
        let cfg = BuildingConfig {
            min_floor: Floor(10),
            max_floor: Floor(10),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn initial_floor_must_be_in_range() {
        let cfg = BuildingConfig {
            min_floor:     Floor(2),
            initial_floor: Floor(1),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_snapshot_interval_rejected() {
        let cfg = BuildingConfig { snapshot_interval_ticks: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
