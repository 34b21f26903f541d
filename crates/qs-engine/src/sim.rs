//! The `Simulation` struct, its dispatch loop, and the run facade.

use std::collections::HashMap;

use qs_core::{CustomerId, QsResult, SimParams, SimRng, SimTime};

use crate::arrivals::ArrivalProcess;
use crate::customer::Customer;
use crate::event::Event;
use crate::metrics::{Metrics, Summary};
use crate::observer::{NoopObserver, SimObserver, TraceObserver};
use crate::pool::{Acquire, ServerPool};
use crate::queue::EventQueue;

/// One simulation run: virtual clock, server pool, in-flight customers,
/// and the metrics they feed.
///
/// Each value is a fresh, fully isolated execution — no state is shared
/// between runs, and [`run`](Simulation::run) consumes the simulation, so
/// a finished run cannot be resumed or re-entered.
pub struct Simulation {
    params:   SimParams,
    horizon:  SimTime,
    queue:    EventQueue,
    pool:     ServerPool,
    arrivals: ArrivalProcess,
    /// Customers between arrival and departure, keyed by ID; entries are
    /// removed (dropped) as soon as their timings are recorded.
    customers: HashMap<CustomerId, Customer>,
    metrics:   Metrics,
    rng:       SimRng,
}

impl Simulation {
    /// Validate `params` and set up an idle simulation.
    ///
    /// Fails fast with [`QsError::InvalidParameter`](qs_core::QsError)
    /// before anything is scheduled.
    pub fn new(params: SimParams) -> QsResult<Self> {
        params.validate()?;
        Ok(Self {
            horizon:   SimTime::from_secs(params.sim_time),
            queue:     EventQueue::new(),
            pool:      ServerPool::new(params.n_servers),
            arrivals:  ArrivalProcess::new(params.arrival_rate)?,
            customers: HashMap::new(),
            metrics:   Metrics::new(),
            rng:       SimRng::new(params.random_seed),
            params,
        })
    }

    /// Drive the run to its horizon and return the summary.
    ///
    /// Exactly one event's handler executes per loop iteration, and the
    /// clock jumps to the event's timestamp before its handler runs.
    /// Events scheduled past the horizon are never executed.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> Summary {
        // Seed the arrival stream: the first customer arrives one
        // exponential gap after time zero.
        let (first, gap) = self.arrivals.next_arrival(&mut self.rng);
        self.queue
            .schedule(SimTime::ZERO + gap, Event::Arrival { customer: first });

        while let Some((_, event)) = self.queue.pop_due(self.horizon) {
            self.dispatch(event, observer);
        }

        observer.on_run_end(self.queue.now(), self.metrics.served());
        self.metrics.summarize()
    }

    fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) {
        let now = self.queue.now();
        match event {
            Event::Arrival { customer } => {
                self.customers
                    .insert(customer, Customer::arrive(customer, now));
                observer.on_arrival(now, customer);

                match self.pool.acquire(customer) {
                    // Same-instant ServiceStart: the customer is seated
                    // with zero wait before any later event runs.
                    Acquire::Granted => {
                        self.queue.schedule_now(Event::ServiceStart { customer });
                    }
                    Acquire::Enqueued => {
                        if let Some(c) = self.customers.get_mut(&customer) {
                            c.enqueue();
                        }
                    }
                }

                // The stream is unbounded: every arrival schedules its
                // successor.  The horizon check in pop_due terminates it.
                let (next, gap) = self.arrivals.next_arrival(&mut self.rng);
                self.queue.schedule(now + gap, Event::Arrival { customer: next });
            }

            Event::ServiceStart { customer } => {
                let Some(c) = self.customers.get_mut(&customer) else {
                    return;
                };
                let waited = c.begin_service(now);
                observer.on_service_start(now, customer, waited);
                self.queue
                    .schedule(now + self.params.service_time, Event::Departure { customer });
            }

            Event::Departure { customer } => {
                let Some(c) = self.customers.remove(&customer) else {
                    return;
                };
                let Some(waited) = c.wait_time() else {
                    return;
                };
                let system_time = now.since(c.arrival_time);
                self.metrics.record(waited, system_time);
                observer.on_departure(now, customer, system_time);

                // Freeing the server may seat the head of the waiting
                // line at this same instant.
                if let Some(next) = self.pool.release() {
                    self.queue.schedule_now(Event::ServiceStart { customer: next });
                }
            }
        }
    }
}

// ── Facade ────────────────────────────────────────────────────────────────────

/// Run one simulation and return its aggregate statistics.
///
/// `verbose` swaps in [`TraceObserver`] for a per-event log; it has no
/// effect on the returned summary.  This is the whole call/return
/// contract a transport layer (HTTP endpoint, tool proxy, CLI) needs.
pub fn run_simulation(params: &SimParams, verbose: bool) -> QsResult<Summary> {
    let sim = Simulation::new(params.clone())?;
    if verbose {
        Ok(sim.run(&mut TraceObserver))
    } else {
        Ok(sim.run(&mut NoopObserver))
    }
}
