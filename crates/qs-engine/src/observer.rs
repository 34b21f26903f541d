//! Run observer hooks and the verbose event trace.

use qs_core::{CustomerId, SimTime};

/// Callbacks invoked by [`Simulation::run`](crate::Simulation::run) as
/// customers move through the system.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.  The engine performs no I/O of its own;
/// anything an observer prints or records is the caller's choice.
pub trait SimObserver {
    /// A customer entered the system.
    fn on_arrival(&mut self, _now: SimTime, _customer: CustomerId) {}

    /// A customer was granted a server; `waited` is its queueing delay.
    fn on_service_start(&mut self, _now: SimTime, _customer: CustomerId, _waited: f64) {}

    /// A customer released its server and left; `system_time` spans
    /// arrival to departure.
    fn on_departure(&mut self, _now: SimTime, _customer: CustomerId, _system_time: f64) {}

    /// The horizon was reached; `served` customers completed.
    fn on_run_end(&mut self, _now: SimTime, _served: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you only need the
/// summary.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Prints a human-readable line per lifecycle event to stdout.
///
/// This is what the `verbose` flag of
/// [`run_simulation`](crate::run_simulation) turns on.  Trace output has
/// no effect on the returned statistics.
pub struct TraceObserver;

impl SimObserver for TraceObserver {
    fn on_arrival(&mut self, now: SimTime, customer: CustomerId) {
        println!("{customer} arrives at {now}");
    }

    fn on_service_start(&mut self, now: SimTime, customer: CustomerId, waited: f64) {
        println!("{customer} starts service at {now} (waited {waited:.2})");
    }

    fn on_departure(&mut self, now: SimTime, customer: CustomerId, system_time: f64) {
        println!("{customer} leaves at {now} (system time {system_time:.2})");
    }
}
