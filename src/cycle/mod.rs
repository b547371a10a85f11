//! Brewing and warming cycles — the two owners of hardware outputs.
//!
//! [`BrewingCycle`] owns the boiler heat and the relief valve;
//! [`WarmingCycle`] owns the warmer-plate heat. Nothing else in the crate
//! writes those outputs (the coordinator owns only the indicator light).

mod brewing;
mod warming;

pub use brewing::{BrewingCycle, CycleState, LoggedStartRequest, StartBrewingRequest};
pub use warming::WarmingCycle;
