//! Warming-cycle controller.

use std::rc::Rc;

use core::cell::Cell;

use crate::hardware::{HardwareApi, WarmerHeat, WarmerPlateReading};

/// Keeps brewed coffee warm. Not a state machine — a single `active` flag
/// plus a hardware-reading guard on resume. Owns the warmer-plate heat.
pub struct WarmingCycle {
    hw: Rc<dyn HardwareApi>,
    active: Cell<bool>,
}

impl WarmingCycle {
    pub fn new(hw: Rc<dyn HardwareApi>) -> Self {
        Self {
            hw,
            active: Cell::new(false),
        }
    }

    /// Whether a warming cycle is active (paused still counts as active).
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Begin warming: set active and turn the warmer on, unconditionally.
    pub fn start(&self) {
        self.active.set(true);
        self.hw.set_warmer_heat(WarmerHeat::On);
    }

    /// End warming: warmer off, clear active. Safe to call when already
    /// inactive.
    pub fn stop(&self) {
        self.hw.set_warmer_heat(WarmerHeat::Off);
        self.active.set(false);
    }

    /// Suspend heating while the pot is away. No-op when inactive.
    pub fn pause(&self) {
        if self.active.get() {
            self.hw.set_warmer_heat(WarmerHeat::Off);
        }
    }

    /// Re-enable heating, but only if a cycle is active **and** the plate
    /// currently holds a non-empty pot — never heat an empty pot.
    pub fn resume(&self) {
        if self.active.get()
            && self.hw.warmer_plate_reading() == WarmerPlateReading::PotNotEmpty
        {
            self.hw.set_warmer_heat(WarmerHeat::On);
        }
    }
}
