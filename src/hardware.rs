//! Hardware port — the boundary between the control core and the machine.
//!
//! ```text
//!   Adapter (real GPIO / simulation) ──▶ HardwareApi ──▶ watchers / cycles
//! ```
//!
//! The control core never touches pins directly: watchers read through the
//! three accessors, the cycles and coordinator write through the four
//! commands. Hardware calls are treated as infallible — an adapter that can
//! fail must retry or latch internally, never surface errors here.
//!
//! All methods take `&self`. The port models memory-mapped registers:
//! reads and writes are independent of Rust ownership of the adapter, and
//! several components hold the same adapter handle at once. Adapters keep
//! their state behind interior mutability.

// ───────────────────────────────────────────────────────────────
// Readings (hardware → core)
// ───────────────────────────────────────────────────────────────

/// Boiler water content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoilerReading {
    Empty,
    NotEmpty,
}

/// Warmer-plate pressure/weight sensor. One reading covers both pot
/// position and pot content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmerPlateReading {
    /// Nothing on the plate.
    NoPot,
    /// Pot present, no coffee in it.
    PotEmpty,
    /// Pot present with coffee.
    PotNotEmpty,
}

/// Momentary brew-button state at poll time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewButtonReading {
    Pushed,
    NotPushed,
}

// ───────────────────────────────────────────────────────────────
// Output commands (core → hardware)
// ───────────────────────────────────────────────────────────────

/// Boiler heating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoilerHeat {
    On,
    Off,
}

/// Pressure-relief valve. Open vents the boiler and halts the brew flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReliefValve {
    Open,
    Closed,
}

/// Warmer-plate heating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmerHeat {
    On,
    Off,
}

/// Front-panel "coffee ready" indicator light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    On,
    Off,
}

// ───────────────────────────────────────────────────────────────
// The port trait
// ───────────────────────────────────────────────────────────────

/// The single collaborator contract the control core consumes.
///
/// Implementations: real GPIO adapters on the device, or
/// [`SimulatedHardware`](crate::sim::SimulatedHardware) for tests and
/// desktop simulation.
pub trait HardwareApi {
    /// Current boiler content.
    fn boiler_reading(&self) -> BoilerReading;

    /// Current warmer-plate sensor reading.
    fn warmer_plate_reading(&self) -> WarmerPlateReading;

    /// Current brew-button state.
    fn brew_button_reading(&self) -> BrewButtonReading;

    /// Command the boiler heating element.
    fn set_boiler_heat(&self, heat: BoilerHeat);

    /// Command the pressure-relief valve.
    fn set_relief_valve(&self, valve: ReliefValve);

    /// Command the warmer-plate heating element.
    fn set_warmer_heat(&self, heat: WarmerHeat);

    /// Command the indicator light.
    fn set_indicator(&self, indicator: Indicator);
}
