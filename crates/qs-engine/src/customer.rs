//! Per-customer lifecycle state.

use qs_core::{CustomerId, SimTime};

/// Where a customer is in its Arrived → Waiting → InService → Departed
/// progression.  Departed customers are removed from the simulation, so
/// the enum only carries the live states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CustomerState {
    /// Just arrived; acquisition outcome not yet applied.
    Arrived,
    /// In the pool's waiting line.
    Waiting,
    /// Holding a server.
    InService,
}

/// One in-flight customer.
///
/// Created when its arrival event dispatches and dropped at departure,
/// right after its wait and system times are recorded — no customer state
/// outlives the run.
#[derive(Debug)]
pub struct Customer {
    pub id:           CustomerId,
    pub arrival_time: SimTime,
    pub state:        CustomerState,
    service_start:    Option<SimTime>,
}

impl Customer {
    /// A customer arriving at `now`, not yet seated.
    pub fn arrive(id: CustomerId, now: SimTime) -> Self {
        Self {
            id,
            arrival_time: now,
            state: CustomerState::Arrived,
            service_start: None,
        }
    }

    /// The customer joined the waiting line.
    pub fn enqueue(&mut self) {
        self.state = CustomerState::Waiting;
    }

    /// Transition to `InService` at `now`; returns the time spent waiting
    /// (zero for a customer seated at its arrival instant).
    pub fn begin_service(&mut self, now: SimTime) -> f64 {
        self.state = CustomerState::InService;
        self.service_start = Some(now);
        now.since(self.arrival_time)
    }

    /// Time spent waiting, once service has started.
    pub fn wait_time(&self) -> Option<f64> {
        self.service_start.map(|start| start.since(self.arrival_time))
    }
}
