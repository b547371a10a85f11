//! Pot watcher — position state machine plus content flag.
//!
//! Two independent aspects are tracked from the same warmer-plate reading,
//! both edge-triggered:
//!
//! - **Position**: an explicit two-state machine. A reading classifies to
//!   a (event, target-state) pair; the event is published only when the
//!   target differs from the current state, so a physical removal or
//!   return notifies exactly once no matter how many polls observe it.
//!   Before the first poll there is no position at all, so the first
//!   observation always notifies — including `PotReturned` when the
//!   first-ever reading already shows the pot present. That is intended
//!   initial-observation behavior.
//! - **Content**: a boolean flag, initially empty. `PotEmpty` fires on the
//!   coffee→empty edge, `CoffeeInPot` on the empty→coffee edge. A `NoPot`
//!   reading leaves the flag and notifications untouched.

use std::rc::Rc;
use std::time::Duration;

use core::cell::Cell;

use log::info;

use crate::events::DomainEvent;
use crate::hardware::{HardwareApi, WarmerPlateReading};
use crate::notify::{Listener, Notifier, Subscription};

/// Where the position state machine believes the pot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotPosition {
    PotInWarmer,
    WarmerEmpty,
}

/// Edge-triggered watcher for pot position and pot content.
pub struct PotWatcher {
    hw: Rc<dyn HardwareApi>,
    events: Notifier<DomainEvent>,
    watching: Cell<bool>,
    poll_interval: Duration,
    /// `None` until the first position poll.
    position: Cell<Option<PotPosition>>,
    /// Content flag: `true` = empty. Starts empty so the first poll that
    /// shows coffee fires `CoffeeInPot`.
    pot_empty: Cell<bool>,
}

impl PotWatcher {
    pub fn new(hw: Rc<dyn HardwareApi>, poll_interval: Duration) -> Self {
        Self {
            hw,
            events: Notifier::new(),
            watching: Cell::new(false),
            poll_interval,
            position: Cell::new(None),
            pot_empty: Cell::new(true),
        }
    }

    /// Register a listener for this watcher's events (all four kinds flow
    /// through the one registry).
    pub fn subscribe(&self, listener: Listener<DomainEvent>) -> Subscription<DomainEvent> {
        self.events.subscribe(listener)
    }

    /// Arm the polling loop.
    pub fn start(&self) {
        self.watching.set(true);
    }

    /// Disarm the polling loop. Observed once per loop iteration.
    pub fn stop(&self) {
        self.watching.set(false);
    }

    pub fn is_watching(&self) -> bool {
        self.watching.get()
    }

    /// Current believed position, `None` before the first poll.
    pub fn position(&self) -> Option<PotPosition> {
        self.position.get()
    }

    /// One synchronous position poll.
    pub fn check_pot_position(&self) {
        let (event, target) = match self.hw.warmer_plate_reading() {
            WarmerPlateReading::NoPot => (DomainEvent::PotRemoved, PotPosition::WarmerEmpty),
            WarmerPlateReading::PotEmpty | WarmerPlateReading::PotNotEmpty => {
                (DomainEvent::PotReturned, PotPosition::PotInWarmer)
            }
        };

        // Transition only when the reading implies something new; repeat
        // polls of an unchanged position are no-ops.
        if self.position.get() != Some(target) {
            self.position.set(Some(target));
            info!("pot position: {:?}", target);
            self.events.publish(&event);
        }
    }

    /// One synchronous content poll.
    pub fn check_pot_content(&self) {
        match self.hw.warmer_plate_reading() {
            WarmerPlateReading::PotEmpty => {
                if !self.pot_empty.get() {
                    self.events.publish(&DomainEvent::PotEmpty);
                }
                self.pot_empty.set(true);
            }
            WarmerPlateReading::PotNotEmpty => {
                if self.pot_empty.get() {
                    self.events.publish(&DomainEvent::CoffeeInPot);
                }
                self.pot_empty.set(false);
            }
            // No pot on the plate tells us nothing about its content.
            WarmerPlateReading::NoPot => {}
        }
    }

    /// The polling loop: position check then content check, once per
    /// interval. Call [`start`](Self::start) first; returns once
    /// [`stop`](Self::stop) is observed.
    pub async fn run(self: Rc<Self>) {
        info!("pot watcher running ({:?} cadence)", self.poll_interval);
        while self.watching.get() {
            self.check_pot_position();
            self.check_pot_content();
            async_io_mini::Timer::after(self.poll_interval).await;
        }
        info!("pot watcher stopped");
    }
}
