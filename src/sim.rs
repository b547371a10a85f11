//! In-memory simulated hardware.
//!
//! [`SimulatedHardware`] backs the integration tests and any desktop
//! front end: readings are plain setters, outputs are readable, and every
//! write command is appended to a history vector so tests can assert on
//! the exact command sequence, not just the final state.

use core::cell::{Cell, RefCell};

use crate::hardware::{
    BoilerHeat, BoilerReading, BrewButtonReading, HardwareApi, Indicator, ReliefValve,
    WarmerHeat, WarmerPlateReading,
};

/// One recorded output command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    BoilerHeat(BoilerHeat),
    ReliefValve(ReliefValve),
    WarmerHeat(WarmerHeat),
    Indicator(Indicator),
}

/// Simulated brewer hardware with recorded command history.
pub struct SimulatedHardware {
    boiler: Cell<BoilerReading>,
    warmer_plate: Cell<WarmerPlateReading>,
    brew_button: Cell<BrewButtonReading>,

    boiler_heat: Cell<BoilerHeat>,
    relief_valve: Cell<ReliefValve>,
    warmer_heat: Cell<WarmerHeat>,
    indicator: Cell<Indicator>,

    commands: RefCell<Vec<Command>>,
}

impl SimulatedHardware {
    /// Fresh machine: empty pot sitting on the plate, boiler empty,
    /// every output off, valve closed.
    pub fn new() -> Self {
        Self {
            boiler: Cell::new(BoilerReading::Empty),
            warmer_plate: Cell::new(WarmerPlateReading::PotEmpty),
            brew_button: Cell::new(BrewButtonReading::NotPushed),
            boiler_heat: Cell::new(BoilerHeat::Off),
            relief_valve: Cell::new(ReliefValve::Closed),
            warmer_heat: Cell::new(WarmerHeat::Off),
            indicator: Cell::new(Indicator::Off),
            commands: RefCell::new(Vec::new()),
        }
    }

    // ── Reading setters (the "physical world" side) ───────────

    pub fn set_boiler_reading(&self, reading: BoilerReading) {
        self.boiler.set(reading);
    }

    pub fn set_warmer_plate_reading(&self, reading: WarmerPlateReading) {
        self.warmer_plate.set(reading);
    }

    pub fn set_brew_button_reading(&self, reading: BrewButtonReading) {
        self.brew_button.set(reading);
    }

    // ── Output state queries ──────────────────────────────────

    pub fn boiler_heat(&self) -> BoilerHeat {
        self.boiler_heat.get()
    }

    pub fn relief_valve(&self) -> ReliefValve {
        self.relief_valve.get()
    }

    pub fn warmer_heat(&self) -> WarmerHeat {
        self.warmer_heat.get()
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator.get()
    }

    // ── Command history ───────────────────────────────────────

    /// Every output command issued so far, in order.
    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    /// Number of commands issued so far.
    pub fn command_count(&self) -> usize {
        self.commands.borrow().len()
    }

    /// Forget the recorded history (output state is kept).
    pub fn clear_commands(&self) {
        self.commands.borrow_mut().clear();
    }
}

impl Default for SimulatedHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareApi for SimulatedHardware {
    fn boiler_reading(&self) -> BoilerReading {
        self.boiler.get()
    }

    fn warmer_plate_reading(&self) -> WarmerPlateReading {
        self.warmer_plate.get()
    }

    fn brew_button_reading(&self) -> BrewButtonReading {
        self.brew_button.get()
    }

    fn set_boiler_heat(&self, heat: BoilerHeat) {
        self.boiler_heat.set(heat);
        self.commands.borrow_mut().push(Command::BoilerHeat(heat));
    }

    fn set_relief_valve(&self, valve: ReliefValve) {
        self.relief_valve.set(valve);
        self.commands.borrow_mut().push(Command::ReliefValve(valve));
    }

    fn set_warmer_heat(&self, heat: WarmerHeat) {
        self.warmer_heat.set(heat);
        self.commands.borrow_mut().push(Command::WarmerHeat(heat));
    }

    fn set_indicator(&self, indicator: Indicator) {
        self.indicator.set(indicator);
        self.commands.borrow_mut().push(Command::Indicator(indicator));
    }
}
