//! Virtual simulation time.
//!
//! # Design
//!
//! Time is a non-negative, finite `f64` measured in abstract simulation
//! seconds.  A continuous representation (rather than an integer tick) is
//! needed because inter-arrival gaps come from an exponential distribution;
//! ordering uses `f64::total_cmp`, which is a genuine total order given the
//! constructor invariant below.
//!
//! `SimTime` values are created at zero or by adding a non-negative gap to
//! an existing time, so NaN, infinite, and negative values cannot enter the
//! engine once run parameters have been validated.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A point in virtual time, in simulation seconds since run start.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Create a time from raw seconds.
    ///
    /// # Panics
    /// Panics in debug mode if `secs` is negative or non-finite.
    #[inline]
    pub fn from_secs(secs: f64) -> SimTime {
        debug_assert!(
            secs.is_finite() && secs >= 0.0,
            "invalid simulation time: {secs}"
        );
        SimTime(secs)
    }

    /// Raw seconds value.
    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, gap: f64) -> SimTime {
        SimTime::from_secs(self.0 + gap)
    }
}

// Manual comparison impls: `total_cmp` keeps Eq/Ord consistent with each
// other, which a derive over f64 cannot provide.

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
