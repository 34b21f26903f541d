//! `qs-core` — foundational types for the `rust_qs` queueing simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It intentionally
//! has no `qs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                 |
//! |------------|------------------------------------------|
//! | [`ids`]    | `CustomerId`                             |
//! | [`time`]   | `SimTime`                                |
//! | [`params`] | `SimParams` and fail-fast validation     |
//! | [`rng`]    | `SimRng` (run-scoped, seeded)            |
//! | [`error`]  | `QsError`, `QsResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{QsError, QsResult};
pub use ids::CustomerId;
pub use params::SimParams;
pub use rng::SimRng;
pub use time::SimTime;
