//! Seeded synthetic request streams.
//!
//! The same `(profile, range, seed)` triple always yields the same stream,
//! so generated runs are as reproducible as file-driven ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::{Floor, FloorRange, Tick};

use crate::RequestRecord;

/// Shape of the generated traffic.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficProfile {
    /// Number of requests to emit.
    pub requests: usize,

    /// Gap between consecutive requests is uniform in `0..=max_gap_ticks`.
    pub max_gap_ticks: u64,

    /// Probability that a trip starts or ends at the bottom floor (the
    /// lobby).  The remaining trips are floor-to-floor.
    pub lobby_share: f64,
}

impl Default for TrafficProfile {
    fn default() -> Self {
        Self { requests: 1_000, max_gap_ticks: 3, lobby_share: 0.5 }
    }
}

/// Generate a non-decreasing stream of valid requests inside `range`.
pub fn generate_requests(profile: &TrafficProfile, range: FloorRange, seed: u64) -> Vec<RequestRecord> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let lobby_share = profile.lobby_share.clamp(0.0, 1.0);
    let mut tick = Tick::ZERO;

    (0..profile.requests)
        .map(|_| {
            tick = tick + rng.gen_range(0..=profile.max_gap_ticks);

            let (origin, destination) = if rng.gen_bool(lobby_share) {
                let other = random_floor_except(&mut rng, range, range.min());
                if rng.gen_bool(0.5) { (range.min(), other) } else { (other, range.min()) }
            } else {
                let origin = Floor(rng.gen_range(range.min().0..=range.max().0));
                (origin, random_floor_except(&mut rng, range, origin))
            };

            RequestRecord { tick, origin, destination }
        })
        .collect()
}

/// Uniform floor in `range` other than `except`.  `range` has at least two floors.
fn random_floor_except(rng: &mut SmallRng, range: FloorRange, except: Floor) -> Floor {
    // Draw from one fewer floor and skip over `except`.
    let f = rng.gen_range(range.min().0..range.max().0);
    if f >= except.0 { Floor(f + 1) } else { Floor(f) }
}
