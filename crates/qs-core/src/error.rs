//! Engine error type.
//!
//! A run that completes with zero served customers is NOT an error — it
//! yields a summary whose averages are `None`.  The only failure mode is a
//! parameter that would make the simulation undefined, rejected before any
//! event is scheduled.

use thiserror::Error;

/// The top-level error type for all `qs-*` crates.
#[derive(Debug, Error)]
pub enum QsError {
    #[error("invalid parameter {name} = {value}: must be {requirement}")]
    InvalidParameter {
        name:        &'static str,
        value:       f64,
        requirement: &'static str,
    },
}

/// Shorthand result type for all `qs-*` crates.
pub type QsResult<T> = Result<T, QsError>;
