//! `qs-engine` — discrete-event engine for the `rust_qs` queueing simulator.
//!
//! # Event loop
//!
//! ```text
//! schedule the first Arrival one exponential gap past t = 0
//! while next event time ≤ horizon:
//!   now ← event time
//!   Arrival      → create customer; acquire a server (free → same-instant
//!                  ServiceStart, busy → join the FIFO line); draw one gap
//!                  and schedule the next Arrival
//!   ServiceStart → record wait; schedule Departure at now + service_time
//!   Departure    → record system time; release the server (the head of
//!                  the line gets a same-instant ServiceStart)
//! ```
//!
//! Events at the same instant dispatch in the order they were scheduled,
//! so queue hand-offs are FIFO-fair.  All randomness is one seeded stream
//! drawn once per arrival; a fixed seed and fixed parameters reproduce
//! the summary exactly.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to parameter and summary types. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::SimParams;
//! use qs_engine::run_simulation;
//!
//! let summary = run_simulation(&SimParams::default(), false)?;
//! println!("{} customers served", summary.total_customers);
//! ```

pub mod arrivals;
pub mod customer;
pub mod event;
pub mod metrics;
pub mod observer;
pub mod pool;
pub mod queue;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::ArrivalProcess;
pub use customer::{Customer, CustomerState};
pub use event::Event;
pub use metrics::{Metrics, Summary};
pub use observer::{NoopObserver, SimObserver, TraceObserver};
pub use pool::{Acquire, ServerPool};
pub use queue::EventQueue;
pub use sim::{Simulation, run_simulation};
