//! Unit tests for lift-schedule: requests, stop schedules, loader, generator.

use lift_core::{Floor, RequestId, Tick};

use crate::Trip;

fn trip(id: u64, origin: i32, destination: i32) -> Trip {
    Trip { request: RequestId(id), origin: Floor(origin), destination: Floor(destination) }
}

// ── Request lifecycle ─────────────────────────────────────────────────────────

#[cfg(test)]
mod request_tests {
    use lift_core::{Direction, Floor, LiftError, RequestId, Tick};

    use crate::{Request, ScheduleError};

    fn request() -> Request {
        Request::new(RequestId(0), Floor(3), Floor(7), Tick(2)).unwrap()
    }

    #[test]
    fn same_floor_rejected() {
        let err = Request::new(RequestId(0), Floor(4), Floor(4), Tick(0)).unwrap_err();
        assert_eq!(err, LiftError::SameFloor(Floor(4)));
    }

    #[test]
    fn fresh_request_is_neither_taken_nor_satisfied() {
        let r = request();
        assert!(!r.is_taken());
        assert!(!r.is_satisfied());
        assert_eq!(r.direction(), Direction::Up);
        assert_eq!(r.trip().length(), 4);
    }

    #[test]
    fn full_lifecycle_records_timestamps() {
        let mut r = request();
        r.mark_taken(Tick(5)).unwrap();
        r.mark_delivered(Tick(12)).unwrap();
        assert_eq!(r.picked_up_at(), Some(Tick(5)));
        assert_eq!(r.arrived_at(), Some(Tick(12)));
        assert!(r.is_taken() && r.is_satisfied());
    }

    #[test]
    fn taken_only_once() {
        let mut r = request();
        r.mark_taken(Tick(5)).unwrap();
        assert!(matches!(r.mark_taken(Tick(6)), Err(ScheduleError::Lifecycle { .. })));
        assert_eq!(r.picked_up_at(), Some(Tick(5)));
    }

    #[test]
    fn delivery_requires_pickup() {
        let mut r = request();
        assert!(r.mark_delivered(Tick(9)).is_err());
        assert!(!r.is_satisfied());
    }

    #[test]
    fn delivered_only_once() {
        let mut r = request();
        r.mark_taken(Tick(5)).unwrap();
        r.mark_delivered(Tick(9)).unwrap();
        assert!(r.mark_delivered(Tick(10)).is_err());
        assert_eq!(r.arrived_at(), Some(Tick(9)));
    }

    #[test]
    fn pickup_before_request_rejected() {
        let mut r = request();
        assert!(r.mark_taken(Tick(1)).is_err());
    }
}

// ── StopSchedule ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_tests {
    use super::*;
    use lift_core::Direction;

    use crate::{StopEntry, StopSchedule};

    #[test]
    fn empty_schedule() {
        let s = StopSchedule::new();
        assert!(s.is_empty());
        assert_eq!(s.lowest(), None);
        assert_eq!(s.highest(), None);
        assert!(s.at(Floor(3)).is_empty());
    }

    #[test]
    fn entries_share_a_floor_in_insertion_order() {
        let mut s = StopSchedule::new();
        s.add(Floor(5), StopEntry::Pickup(trip(0, 5, 9)));
        s.add(Floor(5), StopEntry::Dropoff(trip(1, 2, 5)));
        s.add(Floor(5), StopEntry::Parking);
        assert_eq!(s.len(), 1);
        assert_eq!(s.entry_count(), 3);
        assert_eq!(
            s.at(Floor(5)),
            &[
                StopEntry::Pickup(trip(0, 5, 9)),
                StopEntry::Dropoff(trip(1, 2, 5)),
                StopEntry::Parking,
            ]
        );
    }

    #[test]
    fn take_removes_the_floor() {
        let mut s = StopSchedule::new();
        s.add(Floor(2), StopEntry::Parking);
        s.add(Floor(8), StopEntry::Pickup(trip(0, 8, 1)));
        let taken = s.take(Floor(2)).unwrap();
        assert_eq!(taken, vec![StopEntry::Parking]);
        assert!(!s.contains(Floor(2)));
        assert!(s.take(Floor(2)).is_none());
        assert_eq!(s.entry_count(), 1);
    }

    #[test]
    fn bounds_track_keys() {
        let mut s = StopSchedule::new();
        for f in [7, -1, 4] {
            s.add(Floor(f), StopEntry::Parking);
        }
        assert_eq!(s.lowest(), Some(Floor(-1)));
        assert_eq!(s.highest(), Some(Floor(7)));
    }

    #[test]
    fn scan_order_follows_direction() {
        let mut s = StopSchedule::new();
        for f in [6, 2, 9] {
            s.add(Floor(f), StopEntry::Parking);
        }
        let up: Vec<_> = s.iter_toward(Direction::Up).map(|(f, _)| f.0).collect();
        let down: Vec<_> = s.iter_toward(Direction::Down).map(|(f, _)| f.0).collect();
        assert_eq!(up, [2, 6, 9]);
        assert_eq!(down, [9, 6, 2]);
    }

    #[test]
    fn pending_pickups_skip_dropoffs_and_parking() {
        let mut s = StopSchedule::new();
        s.add(Floor(1), StopEntry::Pickup(trip(0, 1, 5)));
        s.add(Floor(3), StopEntry::Dropoff(trip(1, 0, 3)));
        s.add(Floor(4), StopEntry::Parking);
        s.add(Floor(6), StopEntry::Pickup(trip(2, 6, 2)));
        let ids: Vec<_> = s.pending_pickups().map(|t| t.request.0).collect();
        assert_eq!(ids, [0, 2]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{RequestRecord, ScheduleError, load_requests_reader};

    #[test]
    fn parses_headerless_rows() {
        let csv = "0,3,7\n0,12,0\n4, 0, 55\n";
        let records = load_requests_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            records,
            vec![
                RequestRecord::new(0, 3, 7),
                RequestRecord::new(0, 12, 0),
                RequestRecord::new(4, 0, 55),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = load_requests_reader(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn decreasing_tick_rejected() {
        let csv = "5,1,2\n3,2,1\n";
        match load_requests_reader(Cursor::new(csv)) {
            Err(ScheduleError::NonMonotonic { record, tick, previous }) => {
                assert_eq!(record, 2);
                assert_eq!(tick, Tick(3));
                assert_eq!(previous, Tick(5));
            }
            other => panic!("expected NonMonotonic, got {other:?}"),
        }
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "0,one,2\n";
        assert!(matches!(
            load_requests_reader(Cursor::new(csv)),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = crate::load_requests_csv(std::path::Path::new("/nonexistent/requests.csv"));
        assert!(matches!(result, Err(ScheduleError::Io(_))));
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use lift_core::FloorRange;

    use super::*;
    use crate::{TrafficProfile, generate_requests};

    fn range() -> FloorRange {
        FloorRange::new(Floor(0), Floor(20)).unwrap()
    }

    #[test]
    fn same_seed_same_stream() {
        let profile = TrafficProfile { requests: 200, ..Default::default() };
        assert_eq!(generate_requests(&profile, range(), 7), generate_requests(&profile, range(), 7));
    }

    #[test]
    fn records_are_valid_and_ordered() {
        let profile = TrafficProfile { requests: 500, max_gap_ticks: 4, lobby_share: 0.3 };
        let records = generate_requests(&profile, range(), 42);
        assert_eq!(records.len(), 500);
        let mut previous = Tick::ZERO;
        for r in &records {
            assert!(r.tick >= previous);
            assert!(range().contains(r.origin) && range().contains(r.destination));
            assert_ne!(r.origin, r.destination);
            previous = r.tick;
        }
    }

    #[test]
    fn full_lobby_share_touches_bottom_floor() {
        let profile = TrafficProfile { requests: 100, max_gap_ticks: 1, lobby_share: 1.0 };
        for r in generate_requests(&profile, range(), 3) {
            assert!(r.origin == Floor(0) || r.destination == Floor(0));
        }
    }
}
