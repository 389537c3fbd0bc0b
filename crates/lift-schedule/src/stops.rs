//! `StopSchedule` — a car's floor-keyed set of pending stops.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log S) insert/remove and O(1) amortised access to the
//! lowest and highest keys, where S = distinct floors the car must still
//! visit.  S is bounded by the number of floors in the building, so the
//! ordered map also gives direction-aware scans (ascending going up,
//! descending going down) for free.

use std::collections::BTreeMap;

use lift_core::{Direction, Floor};

use crate::Trip;

// ── StopEntry ─────────────────────────────────────────────────────────────────

/// Why a car must halt at a given floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopEntry {
    /// Repositioning move of an idle car.  No passenger involved.
    Parking,
    /// Board `trip.request` at `trip.origin`.
    Pickup(Trip),
    /// Deliver `trip.request` at `trip.destination`.
    Dropoff(Trip),
}

impl StopEntry {
    /// The trip of a passenger still waiting to board, if this is a pickup.
    #[inline]
    pub fn pending_pickup(&self) -> Option<&Trip> {
        match self {
            StopEntry::Pickup(trip) => Some(trip),
            _ => None,
        }
    }

    #[inline]
    pub fn trip(&self) -> Option<&Trip> {
        match self {
            StopEntry::Pickup(trip) | StopEntry::Dropoff(trip) => Some(trip),
            StopEntry::Parking => None,
        }
    }
}

// ── StopSchedule ──────────────────────────────────────────────────────────────

/// Floor → entries to resolve at that floor, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopSchedule {
    inner: BTreeMap<Floor, Vec<StopEntry>>,
    /// Cached total entry count for O(1) `entry_count()`.
    total: usize,
}

impl StopSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the stop at `floor`, creating the stop if absent.
    pub fn add(&mut self, floor: Floor, entry: StopEntry) {
        self.inner.entry(floor).or_default().push(entry);
        self.total += 1;
    }

    /// Remove and return every entry scheduled at `floor`.
    ///
    /// Returns `None` when the car has no reason to halt there.
    pub fn take(&mut self, floor: Floor) -> Option<Vec<StopEntry>> {
        let entries = self.inner.remove(&floor)?;
        self.total -= entries.len();
        Some(entries)
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.inner.contains_key(&floor)
    }

    /// Entries at `floor` (empty slice if none).
    pub fn at(&self, floor: Floor) -> &[StopEntry] {
        self.inner.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The lowest floor with a pending stop.
    pub fn lowest(&self) -> Option<Floor> {
        self.inner.keys().next().copied()
    }

    /// The highest floor with a pending stop.
    pub fn highest(&self) -> Option<Floor> {
        self.inner.keys().next_back().copied()
    }

    /// Stops in ascending floor order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Floor, &[StopEntry])> + '_ {
        self.inner.iter().map(|(&f, e)| (f, e.as_slice()))
    }

    /// Stops in scan order: ascending for `Up`, descending for `Down`.
    pub fn iter_toward(
        &self,
        direction: Direction,
    ) -> Box<dyn Iterator<Item = (Floor, &[StopEntry])> + '_> {
        match direction {
            Direction::Up => Box::new(self.iter()),
            Direction::Down => Box::new(self.iter().rev()),
        }
    }

    /// Every trip still waiting to board, across all stops.
    pub fn pending_pickups(&self) -> impl Iterator<Item = &Trip> + '_ {
        self.inner
            .values()
            .flat_map(|entries| entries.iter().filter_map(StopEntry::pending_pickup))
    }

    /// Number of distinct floors with a pending stop.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total entries across all floors.
    pub fn entry_count(&self) -> usize {
        self.total
    }
}
