//! System configuration parameters
//!
//! All tunable parameters for the Brewmatic control core. Poll cadence is
//! best-effort: a watcher sleeps for its interval between checks, it does
//! not compensate for check duration.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrewerConfig {
    /// Boiler-content poll interval (milliseconds)
    pub boiler_poll_interval_ms: u32,
    /// Brew-button poll interval (milliseconds)
    pub brew_button_poll_interval_ms: u32,
    /// Warmer-plate (pot position + content) poll interval (milliseconds)
    pub pot_poll_interval_ms: u32,
}

impl Default for BrewerConfig {
    fn default() -> Self {
        Self {
            boiler_poll_interval_ms: 1000,
            brew_button_poll_interval_ms: 1000,
            pot_poll_interval_ms: 1000,
        }
    }
}
