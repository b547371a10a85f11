//! The event-reactive coordinator.
//!
//! Subscribes to every watcher and brewing-cycle event and reacts to each
//! exactly once, synchronously. It owns the indicator light and the two
//! `is_brewing` / `is_warming` flags, and delegates everything else to the
//! cycles.

use std::rc::Rc;

use core::cell::Cell;

use crate::cycle::{BrewingCycle, LoggedStartRequest, WarmingCycle};
use crate::events::DomainEvent;
use crate::hardware::{HardwareApi, Indicator};

/// Composes the brewing and warming cycles under one event handler.
pub struct Coordinator {
    hw: Rc<dyn HardwareApi>,
    brewing: Rc<BrewingCycle>,
    warming: Rc<WarmingCycle>,
    // Deliberately independent of the cycles' own state: these flags are
    // the coordinator's view, set only by its event handlers, and are
    // never reconciled against CycleState / WarmingCycle::is_active.
    is_brewing: Cell<bool>,
    is_warming: Cell<bool>,
}

impl Coordinator {
    pub fn new(
        hw: Rc<dyn HardwareApi>,
        brewing: Rc<BrewingCycle>,
        warming: Rc<WarmingCycle>,
    ) -> Self {
        Self {
            hw,
            brewing,
            warming,
            is_brewing: Cell::new(false),
            is_warming: Cell::new(false),
        }
    }

    pub fn is_brewing(&self) -> bool {
        self.is_brewing.get()
    }

    pub fn is_warming(&self) -> bool {
        self.is_warming.get()
    }

    /// React to one domain event.
    pub fn handle(&self, event: &DomainEvent) {
        match event {
            DomainEvent::BrewButtonPushed => {
                // Re-pressing during a brew is a no-op; each effective
                // press gets a fresh request object.
                if !self.is_brewing.get() {
                    self.brewing.start(&LoggedStartRequest::new());
                }
            }
            DomainEvent::BrewingCycleStarted => {
                self.is_brewing.set(true);
                self.hw.set_indicator(Indicator::Off);
            }
            DomainEvent::BrewingCycleCompleted => {
                self.hw.set_indicator(Indicator::On);
                self.is_brewing.set(false);
            }
            DomainEvent::PotEmpty => {
                // While brewing, the fresh-coffee indicator and warmer are
                // left alone; the pot emptying mid-brew means nothing yet.
                if !self.is_brewing.get() {
                    self.hw.set_indicator(Indicator::Off);
                    self.warming.stop();
                    self.is_warming.set(false);
                }
            }
            DomainEvent::CoffeeInPot => {
                self.is_warming.set(true);
                self.warming.start();
            }
            DomainEvent::PotRemoved => {
                if self.is_brewing.get() {
                    self.brewing.pause();
                }
                if self.is_warming.get() {
                    self.warming.pause();
                }
            }
            DomainEvent::PotReturned => {
                if self.is_brewing.get() {
                    self.brewing.resume();
                }
                if self.is_warming.get() {
                    self.warming.resume();
                }
            }
            // Routed straight from the boiler watcher to
            // BrewingCycle::boiler_empty at assembly time.
            DomainEvent::BoilerEmpty => {}
        }
    }
}
