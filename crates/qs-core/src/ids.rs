//! Customer identifiers.

use std::fmt;

/// Sequential identifier assigned to each arriving customer.
///
/// IDs start at 0 and increase in arrival order, so they double as an
/// arrival counter in trace output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u64);

impl CustomerId {
    /// The ID following `self` in arrival order.
    #[inline]
    pub fn next(self) -> CustomerId {
        CustomerId(self.0 + 1)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {}", self.0)
    }
}
