//! Brew-button watcher.

use std::rc::Rc;
use std::time::Duration;

use core::cell::Cell;

use log::info;

use crate::events::DomainEvent;
use crate::hardware::{BrewButtonReading, HardwareApi};
use crate::notify::{Listener, Notifier, Subscription};

/// Polls the brew button and publishes [`DomainEvent::BrewButtonPushed`]
/// on every poll for as long as the button reads pushed (level-triggered).
/// A held-down button produces one event per poll; downstream the
/// coordinator's `is_brewing` flag makes the repeats harmless.
pub struct BrewButtonWatcher {
    hw: Rc<dyn HardwareApi>,
    events: Notifier<DomainEvent>,
    watching: Cell<bool>,
    poll_interval: Duration,
}

impl BrewButtonWatcher {
    pub fn new(hw: Rc<dyn HardwareApi>, poll_interval: Duration) -> Self {
        Self {
            hw,
            events: Notifier::new(),
            watching: Cell::new(false),
            poll_interval,
        }
    }

    /// Register a listener for this watcher's events.
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

    /// One synchronous poll: publish `BrewButtonPushed` if the button
    /// reads pushed.
    pub fn check_brew_button(&self) {
        if self.hw.brew_button_reading() == BrewButtonReading::Pushed {
            self.events.publish(&DomainEvent::BrewButtonPushed);
        }
    }

    /// The polling loop. Call [`start`](Self::start) first; returns once
    /// [`stop`](Self::stop) is observed.
    pub async fn run(self: Rc<Self>) {
        info!("brew-button watcher running ({:?} cadence)", self.poll_interval);
        while self.watching.get() {
            self.check_brew_button();
            async_io_mini::Timer::after(self.poll_interval).await;
        }
        info!("brew-button watcher stopped");
    }
}
