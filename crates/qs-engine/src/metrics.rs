//! Per-run metrics aggregation.

/// Append-only accumulator for per-customer timings.
///
/// Owned by exactly one run and read once at the end; nothing is shared
/// across runs.
#[derive(Debug, Default)]
pub struct Metrics {
    wait_times:   Vec<f64>,
    system_times: Vec<f64>,
    served:       u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed customer.
    pub fn record(&mut self, wait_time: f64, system_time: f64) {
        self.wait_times.push(wait_time);
        self.system_times.push(system_time);
        self.served += 1;
    }

    /// Customers that completed service so far.
    pub fn served(&self) -> u64 {
        self.served
    }

    /// Reduce to the run summary.
    ///
    /// Averages are `None` — not zero, not NaN — when no customer
    /// completed, so callers can tell "no data" from "no delay".
    pub fn summarize(&self) -> Summary {
        Summary {
            total_customers: self.served,
            avg_wait_time:   mean(&self.wait_times).map(round2),
            avg_system_time: mean(&self.system_times).map(round2),
        }
    }
}

/// Aggregate statistics for one completed run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Customers that completed service within the horizon.
    pub total_customers: u64,

    /// Mean wait before service, rounded to 2 decimals.  `None` if no
    /// customer completed.
    pub avg_wait_time: Option<f64>,

    /// Mean time from arrival to departure, rounded to 2 decimals.
    /// `None` if no customer completed.
    pub avg_system_time: Option<f64>,
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Round to 2 decimals for presentation.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
