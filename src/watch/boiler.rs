//! Boiler content watcher.

use std::rc::Rc;
use std::time::Duration;

use core::cell::Cell;

use log::info;

use crate::events::DomainEvent;
use crate::hardware::{BoilerReading, HardwareApi};
use crate::notify::{Listener, Notifier, Subscription};

/// Polls the boiler and publishes [`DomainEvent::BoilerEmpty`] on every
/// poll for as long as the boiler reads empty (level-triggered).
pub struct BoilerWatcher {
    hw: Rc<dyn HardwareApi>,
    events: Notifier<DomainEvent>,
    watching: Cell<bool>,
    poll_interval: Duration,
}

impl BoilerWatcher {
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

    /// One synchronous poll: publish `BoilerEmpty` if the boiler reads empty.
    pub fn check_boiler_content(&self) {
        if self.hw.boiler_reading() == BoilerReading::Empty {
            self.events.publish(&DomainEvent::BoilerEmpty);
        }
    }

    /// The polling loop. Call [`start`](Self::start) first, then drive this
    /// on a single-threaded executor; returns once [`stop`](Self::stop) is
    /// observed.
    pub async fn run(self: Rc<Self>) {
        info!("boiler watcher running ({:?} cadence)", self.poll_interval);
        while self.watching.get() {
            self.check_boiler_content();
            async_io_mini::Timer::after(self.poll_interval).await;
        }
        info!("boiler watcher stopped");
    }
}
