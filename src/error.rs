//! Rejection reasons.
//!
//! The only modeled failure in the control core is "cannot start a brewing
//! cycle", reported synchronously through the
//! [`StartBrewingRequest`](crate::cycle::StartBrewingRequest) callbacks —
//! never as an error value on the call path. Every other out-of-table
//! state/event combination is a deliberate silent no-op. Hardware access is
//! infallible by contract, so there is nothing else to model.

use core::fmt;

/// Why a brewing cycle could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRejection {
    /// The warmer plate is empty — brewing would pour onto the plate.
    PotNotInWarmer,
    /// The boiler holds no water to brew with.
    BoilerEmpty,
}

impl fmt::Display for StartRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PotNotInWarmer => write!(f, "pot is not in the warmer plate"),
            Self::BoilerEmpty => write!(f, "boiler is empty"),
        }
    }
}
