//! Run parameters and fail-fast validation.

use crate::{QsError, QsResult};

/// Input contract for one simulation run.
///
/// Every field has a reference default so callers can override only what
/// they care about.  The engine calls [`validate`](SimParams::validate)
/// before scheduling anything; an out-of-range field fails the run with
/// [`QsError::InvalidParameter`] and no partial state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Number of identical parallel servers.  Must be ≥ 1.
    pub n_servers: u32,

    /// Mean customer arrivals per simulated second.  Must be finite and
    /// > 0; the mean inter-arrival gap is `1 / arrival_rate`.
    pub arrival_rate: f64,

    /// Fixed time every customer holds a server.  Must be finite and > 0.
    pub service_time: f64,

    /// Simulation horizon: events past this instant are discarded, never
    /// executed.  Must be finite and ≥ 0.
    pub sim_time: f64,

    /// Master RNG seed.  The same seed and parameters always produce an
    /// identical summary.
    pub random_seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            n_servers:    1,
            arrival_rate: 5.0,
            service_time: 3.0,
            sim_time:     50.0,
            random_seed:  42,
        }
    }
}

impl SimParams {
    /// Check every field against its constraint.
    pub fn validate(&self) -> QsResult<()> {
        if self.n_servers < 1 {
            return Err(QsError::InvalidParameter {
                name:        "n_servers",
                value:       f64::from(self.n_servers),
                requirement: "an integer >= 1",
            });
        }
        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            return Err(QsError::InvalidParameter {
                name:        "arrival_rate",
                value:       self.arrival_rate,
                requirement: "a finite value > 0",
            });
        }
        if !(self.service_time.is_finite() && self.service_time > 0.0) {
            return Err(QsError::InvalidParameter {
                name:        "service_time",
                value:       self.service_time,
                requirement: "a finite value > 0",
            });
        }
        if !(self.sim_time.is_finite() && self.sim_time >= 0.0) {
            return Err(QsError::InvalidParameter {
                name:        "sim_time",
                value:       self.sim_time,
                requirement: "a finite value >= 0",
            });
        }
        Ok(())
    }
}
