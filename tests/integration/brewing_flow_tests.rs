//! End-to-end brewing flows: watchers → coordinator → cycles → outputs.
//!
//! Every scenario drives a fully assembled [`Brewer`] by mutating the
//! simulated readings and ticking [`Brewer::poll_once`], then asserts on
//! the hardware outputs and cycle state the way an operator would see
//! them.

use std::rc::Rc;

use brewmatic::config::BrewerConfig;
use brewmatic::cycle::CycleState;
use brewmatic::hardware::{
    BoilerHeat, BoilerReading, BrewButtonReading, Indicator, ReliefValve, WarmerPlateReading,
};
use brewmatic::machine::Brewer;
use brewmatic::sim::{Command, SimulatedHardware};

fn make_brewer() -> (Rc<SimulatedHardware>, Brewer) {
    let hw = Rc::new(SimulatedHardware::new());
    let brewer = Brewer::assemble(hw.clone(), &BrewerConfig::default());
    (hw, brewer)
}

// ── Happy path ────────────────────────────────────────────────

#[test]
fn full_brew_from_button_push_to_empty_boiler() {
    let (hw, brewer) = make_brewer();

    // Operator fills the boiler and pushes the button.
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::InProgress);
    assert!(brewer.coordinator().is_brewing());
    assert_eq!(hw.boiler_heat(), BoilerHeat::On);
    assert_eq!(hw.relief_valve(), ReliefValve::Closed);
    assert_eq!(hw.indicator(), Indicator::Off);

    // Button released; the water eventually runs out.
    hw.set_brew_button_reading(BrewButtonReading::NotPushed);
    hw.set_boiler_reading(BoilerReading::Empty);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::ReadyToStart);
    assert!(!brewer.coordinator().is_brewing());
    assert_eq!(hw.boiler_heat(), BoilerHeat::Off);
    assert_eq!(hw.indicator(), Indicator::On);
}

#[test]
fn holding_the_button_starts_exactly_one_cycle() {
    let (hw, brewer) = make_brewer();
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);

    for _ in 0..5 {
        brewer.poll_once();
    }

    let heat_on = hw
        .commands()
        .iter()
        .filter(|c| **c == Command::BoilerHeat(BoilerHeat::On))
        .count();
    assert_eq!(heat_on, 1, "held button must not restart the cycle");
    assert_eq!(brewer.brewing().state(), CycleState::InProgress);
}

// ── Interlocks ────────────────────────────────────────────────

#[test]
fn button_push_with_empty_boiler_does_not_start() {
    let (hw, brewer) = make_brewer();
    // Boiler reads Empty by default.
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::ReadyToStart);
    assert!(!brewer.coordinator().is_brewing());
    assert_eq!(hw.boiler_heat(), BoilerHeat::Off);
}

#[test]
fn button_push_with_no_pot_does_not_start() {
    let (hw, brewer) = make_brewer();
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_warmer_plate_reading(WarmerPlateReading::NoPot);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::ReadyToStart);
    assert_eq!(hw.boiler_heat(), BoilerHeat::Off);
}

// ── Mid-brew pot handling ─────────────────────────────────────

#[test]
fn removing_the_pot_pauses_the_brew_and_opens_the_valve() {
    let (hw, brewer) = make_brewer();
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();
    hw.set_brew_button_reading(BrewButtonReading::NotPushed);

    hw.set_warmer_plate_reading(WarmerPlateReading::NoPot);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::Paused);
    assert_eq!(hw.relief_valve(), ReliefValve::Open);
    assert_eq!(hw.boiler_heat(), BoilerHeat::Off);

    // Pot back on the plate: brewing picks up where it left off.
    hw.set_warmer_plate_reading(WarmerPlateReading::PotEmpty);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::InProgress);
    assert_eq!(hw.relief_valve(), ReliefValve::Closed);
    assert_eq!(hw.boiler_heat(), BoilerHeat::On);
}

#[test]
fn boiler_running_dry_while_paused_still_completes() {
    let (hw, brewer) = make_brewer();
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();
    hw.set_brew_button_reading(BrewButtonReading::NotPushed);

    hw.set_warmer_plate_reading(WarmerPlateReading::NoPot);
    brewer.poll_once();
    assert_eq!(brewer.brewing().state(), CycleState::Paused);

    hw.set_boiler_reading(BoilerReading::Empty);
    brewer.poll_once();

    assert_eq!(brewer.brewing().state(), CycleState::ReadyToStart);
    assert_eq!(hw.relief_valve(), ReliefValve::Closed);
    assert_eq!(hw.boiler_heat(), BoilerHeat::Off);
    assert_eq!(hw.indicator(), Indicator::On);
}

#[test]
fn back_to_back_brews_after_refilling() {
    let (hw, brewer) = make_brewer();

    for _ in 0..2 {
        hw.set_boiler_reading(BoilerReading::NotEmpty);
        hw.set_brew_button_reading(BrewButtonReading::Pushed);
        brewer.poll_once();
        assert_eq!(brewer.brewing().state(), CycleState::InProgress);

        hw.set_brew_button_reading(BrewButtonReading::NotPushed);
        hw.set_boiler_reading(BoilerReading::Empty);
        brewer.poll_once();
        assert_eq!(brewer.brewing().state(), CycleState::ReadyToStart);
    }

    let heat_on = hw
        .commands()
        .iter()
        .filter(|c| **c == Command::BoilerHeat(BoilerHeat::On))
        .count();
    assert_eq!(heat_on, 2);
}
