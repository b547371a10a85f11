//! Machine assembly — wiring, lifecycle, and the polling runtime.
//!
//! [`Brewer`] builds the full control graph over one hardware handle:
//!
//! ```text
//!  brew-button watcher ─┐
//!  pot watcher ─────────┼──▶ Coordinator ──▶ cycles ──▶ hardware outputs
//!  brewing cycle ───────┘
//!  boiler watcher ──────────▶ BrewingCycle::boiler_empty
//! ```
//!
//! The subscriptions live as long as the brewer. All polling loops run as
//! cooperative tasks on a single-threaded executor, so every handler in
//! the graph is naturally serialized — no locks, no event queue.

use std::rc::Rc;
use std::time::Duration;

use crate::config::BrewerConfig;
use crate::coordinator::Coordinator;
use crate::cycle::{BrewingCycle, WarmingCycle};
use crate::events::DomainEvent;
use crate::hardware::HardwareApi;
use crate::notify::{Listener, Subscription};
use crate::watch::{BoilerWatcher, BrewButtonWatcher, PotWatcher};

/// A fully wired brewer control core.
pub struct Brewer {
    boiler_watcher: Rc<BoilerWatcher>,
    brew_button_watcher: Rc<BrewButtonWatcher>,
    pot_watcher: Rc<PotWatcher>,
    brewing: Rc<BrewingCycle>,
    warming: Rc<WarmingCycle>,
    coordinator: Rc<Coordinator>,
    _subscriptions: Vec<Subscription<DomainEvent>>,
}

impl Brewer {
    /// Build and wire every component against `hw`.
    pub fn assemble(hw: Rc<dyn HardwareApi>, config: &BrewerConfig) -> Self {
        let brewing = Rc::new(BrewingCycle::new(Rc::clone(&hw)));
        let warming = Rc::new(WarmingCycle::new(Rc::clone(&hw)));
        let coordinator = Rc::new(Coordinator::new(
            Rc::clone(&hw),
            Rc::clone(&brewing),
            Rc::clone(&warming),
        ));

        let boiler_watcher = Rc::new(BoilerWatcher::new(
            Rc::clone(&hw),
            Duration::from_millis(u64::from(config.boiler_poll_interval_ms)),
        ));
        let brew_button_watcher = Rc::new(BrewButtonWatcher::new(
            Rc::clone(&hw),
            Duration::from_millis(u64::from(config.brew_button_poll_interval_ms)),
        ));
        let pot_watcher = Rc::new(PotWatcher::new(
            Rc::clone(&hw),
            Duration::from_millis(u64::from(config.pot_poll_interval_ms)),
        ));

        // Coordinator listens to the button, the pot, and the brewing cycle.
        let mut subscriptions = vec![
            brew_button_watcher.subscribe(Self::coordinator_listener(&coordinator)),
            pot_watcher.subscribe(Self::coordinator_listener(&coordinator)),
            brewing.subscribe(Self::coordinator_listener(&coordinator)),
        ];

        // The boiler watcher drives the brewing cycle directly.
        let cycle = Rc::clone(&brewing);
        subscriptions.push(
            boiler_watcher.subscribe(Rc::new(move |_: &DomainEvent| cycle.boiler_empty())),
        );

        Self {
            boiler_watcher,
            brew_button_watcher,
            pot_watcher,
            brewing,
            warming,
            coordinator,
            _subscriptions: subscriptions,
        }
    }

    fn coordinator_listener(coordinator: &Rc<Coordinator>) -> Listener<DomainEvent> {
        let handler = Rc::clone(coordinator);
        Rc::new(move |event: &DomainEvent| handler.handle(event))
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Arm every watcher.
    pub fn start(&self) {
        self.boiler_watcher.start();
        self.brew_button_watcher.start();
        self.pot_watcher.start();
    }

    /// Disarm every watcher; each loop exits after its current iteration.
    pub fn stop(&self) {
        self.boiler_watcher.stop();
        self.brew_button_watcher.stop();
        self.pot_watcher.stop();
    }

    /// One synchronous poll of every watcher — a deterministic tick for
    /// tests and simulations, no timers involved.
    pub fn poll_once(&self) {
        self.boiler_watcher.check_boiler_content();
        self.brew_button_watcher.check_brew_button();
        self.pot_watcher.check_pot_position();
        self.pot_watcher.check_pot_content();
    }

    /// Drive all three polling loops concurrently; completes once every
    /// watcher has observed [`stop`](Self::stop).
    pub async fn watch(&self) {
        let boiler = Rc::clone(&self.boiler_watcher).run();
        let button = Rc::clone(&self.brew_button_watcher).run();
        let pot = Rc::clone(&self.pot_watcher).run();
        futures_lite::future::zip(futures_lite::future::zip(boiler, button), pot).await;
    }

    /// Run the polling loops on a local executor until stopped.
    pub fn run_blocking(&self) {
        let executor: edge_executor::LocalExecutor<'_, 4> = edge_executor::LocalExecutor::new();

        let boiler = executor.spawn(Rc::clone(&self.boiler_watcher).run());
        let button = executor.spawn(Rc::clone(&self.brew_button_watcher).run());
        let pot = executor.spawn(Rc::clone(&self.pot_watcher).run());

        futures_lite::future::block_on(executor.run(async {
            boiler.await;
            button.await;
            pot.await;
        }));
    }

    // ── Component access ──────────────────────────────────────

    pub fn boiler_watcher(&self) -> &BoilerWatcher {
        &self.boiler_watcher
    }

    pub fn brew_button_watcher(&self) -> &BrewButtonWatcher {
        &self.brew_button_watcher
    }

    pub fn pot_watcher(&self) -> &PotWatcher {
        &self.pot_watcher
    }

    pub fn brewing(&self) -> &BrewingCycle {
        &self.brewing
    }

    pub fn warming(&self) -> &WarmingCycle {
        &self.warming
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }
}
