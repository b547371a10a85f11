//! Warmer-plate flows: pot contents drive the warmer and the indicator.

use std::rc::Rc;

use brewmatic::config::BrewerConfig;
use brewmatic::hardware::{
    BoilerReading, BrewButtonReading, Indicator, WarmerHeat, WarmerPlateReading,
};
use brewmatic::machine::Brewer;
use brewmatic::sim::SimulatedHardware;

fn make_brewer() -> (Rc<SimulatedHardware>, Brewer) {
    let hw = Rc::new(SimulatedHardware::new());
    let brewer = Brewer::assemble(hw.clone(), &BrewerConfig::default());
    (hw, brewer)
}

#[test]
fn coffee_in_the_pot_turns_the_warmer_on() {
    let (hw, brewer) = make_brewer();

    hw.set_warmer_plate_reading(WarmerPlateReading::PotNotEmpty);
    brewer.poll_once();

    assert!(brewer.coordinator().is_warming());
    assert!(brewer.warming().is_active());
    assert_eq!(hw.warmer_heat(), WarmerHeat::On);
}

#[test]
fn lifting_a_warm_pot_pauses_the_warmer() {
    let (hw, brewer) = make_brewer();
    hw.set_warmer_plate_reading(WarmerPlateReading::PotNotEmpty);
    brewer.poll_once();

    hw.set_warmer_plate_reading(WarmerPlateReading::NoPot);
    brewer.poll_once();

    assert_eq!(hw.warmer_heat(), WarmerHeat::Off);
    // Still warming logically; the pause is positional.
    assert!(brewer.coordinator().is_warming());

    hw.set_warmer_plate_reading(WarmerPlateReading::PotNotEmpty);
    brewer.poll_once();

    assert_eq!(hw.warmer_heat(), WarmerHeat::On);
}

#[test]
fn returning_an_emptied_pot_ends_warming() {
    let (hw, brewer) = make_brewer();
    hw.set_warmer_plate_reading(WarmerPlateReading::PotNotEmpty);
    brewer.poll_once();

    // Pot lifted, poured out, and put back empty.
    hw.set_warmer_plate_reading(WarmerPlateReading::NoPot);
    brewer.poll_once();
    hw.set_warmer_plate_reading(WarmerPlateReading::PotEmpty);
    brewer.poll_once();

    assert!(!brewer.coordinator().is_warming());
    assert!(!brewer.warming().is_active());
    assert_eq!(hw.warmer_heat(), WarmerHeat::Off);
    assert_eq!(hw.indicator(), Indicator::Off);
}

#[test]
fn emptying_the_pot_clears_the_fresh_coffee_indicator() {
    let (hw, brewer) = make_brewer();

    // Brew a full pot.
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();
    hw.set_brew_button_reading(BrewButtonReading::NotPushed);
    hw.set_warmer_plate_reading(WarmerPlateReading::PotNotEmpty);
    hw.set_boiler_reading(BoilerReading::Empty);
    brewer.poll_once();

    assert_eq!(hw.indicator(), Indicator::On);
    assert!(brewer.coordinator().is_warming());

    // Last cup poured.
    hw.set_warmer_plate_reading(WarmerPlateReading::PotEmpty);
    brewer.poll_once();

    assert!(!brewer.coordinator().is_warming());
    assert_eq!(hw.warmer_heat(), WarmerHeat::Off);
    assert_eq!(hw.indicator(), Indicator::Off);
}

#[test]
fn pot_emptied_mid_brew_leaves_the_cycle_alone() {
    let (hw, brewer) = make_brewer();
    hw.set_boiler_reading(BoilerReading::NotEmpty);
    hw.set_brew_button_reading(BrewButtonReading::Pushed);
    brewer.poll_once();
    hw.set_brew_button_reading(BrewButtonReading::NotPushed);

    // Coffee starts collecting, then someone pours a cup mid-brew.
    hw.set_warmer_plate_reading(WarmerPlateReading::PotNotEmpty);
    brewer.poll_once();
    hw.set_warmer_plate_reading(WarmerPlateReading::PotEmpty);
    brewer.poll_once();

    // Brewing continues and the emptied pot means nothing yet: the
    // indicator and the warmer are left exactly as they were.
    assert!(brewer.coordinator().is_brewing());
    assert_eq!(hw.indicator(), Indicator::Off);
    assert!(brewer.coordinator().is_warming());
    assert_eq!(hw.warmer_heat(), WarmerHeat::On);
}
