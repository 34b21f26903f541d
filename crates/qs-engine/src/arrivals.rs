//! Poisson arrival process.
//!
//! # Why this shape
//!
//! Arrivals form an unbounded lazy sequence: dispatching one arrival draws
//! a single exponential gap and schedules the next arrival behind it, so
//! there is never more than one future arrival pending.  Termination comes
//! from the scheduler's horizon, not from the process itself.

use qs_core::{CustomerId, QsError, QsResult, SimRng};
use rand_distr::Exp;

/// Generator of the customer arrival stream.
pub struct ArrivalProcess {
    gap_dist:      Exp<f64>,
    next_customer: CustomerId,
}

impl ArrivalProcess {
    /// Build the process for `arrival_rate` mean arrivals per second.
    ///
    /// The rate is validated upstream; a non-positive or non-finite value
    /// still fails here rather than producing an undefined distribution.
    pub fn new(arrival_rate: f64) -> QsResult<Self> {
        let gap_dist = Exp::new(arrival_rate).map_err(|_| QsError::InvalidParameter {
            name:        "arrival_rate",
            value:       arrival_rate,
            requirement: "a finite value > 0",
        })?;
        Ok(Self {
            gap_dist,
            next_customer: CustomerId(0),
        })
    }

    /// Draw the next inter-arrival gap and hand out the next customer ID.
    ///
    /// Exactly one RNG draw per call, in dispatch order — the run's
    /// determinism contract rests on this.
    pub fn next_arrival(&mut self, rng: &mut SimRng) -> (CustomerId, f64) {
        let gap = rng.sample(&self.gap_dist);
        let customer = self.next_customer;
        self.next_customer = customer.next();
        (customer, gap)
    }
}
