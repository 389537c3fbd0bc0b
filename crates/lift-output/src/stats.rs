//! Wait-time summary over delivered requests.

use std::fmt;

use crate::CompletionRow;

/// Averages over a set of completions.
///
/// *Wait* is the time from request to pickup.  *Delay* is the time on board
/// beyond a non-stop ride with one door opening (see
/// [`CompletionRow::delay`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitStatistics {
    pub requests:   usize,
    pub mean_wait:  f64,
    pub mean_delay: f64,
    /// `mean_wait + mean_delay`.
    pub mean_total: f64,
    /// Population standard deviation of per-request `wait + delay`.
    pub std_dev:    f64,
}

impl WaitStatistics {
    /// `None` for an empty slice.
    pub fn from_rows(rows: &[CompletionRow], door_open_ticks: u32) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let n = rows.len() as f64;

        let totals: Vec<(f64, f64)> = rows
            .iter()
            .map(|r| (r.wait() as f64, r.delay(door_open_ticks) as f64))
            .collect();

        let mean_wait = totals.iter().map(|&(w, _)| w).sum::<f64>() / n;
        let mean_delay = totals.iter().map(|&(_, d)| d).sum::<f64>() / n;
        let mean_total = mean_wait + mean_delay;
        let variance = totals
            .iter()
            .map(|&(w, d)| (w + d - mean_total).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            requests: rows.len(),
            mean_wait,
            mean_delay,
            mean_total,
            std_dev: variance.sqrt(),
        })
    }
}

impl fmt::Display for WaitStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "average time before being picked up: {:.2}", self.mean_wait)?;
        writeln!(f, "average delay after being picked up: {:.2}", self.mean_delay)?;
        writeln!(f, "average wait time: {:.2}", self.mean_total)?;
        writeln!(f, "standard deviation: {:.2}", self.std_dev)?;
        write!(f, "total requests: {}", self.requests)
    }
}
