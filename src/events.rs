//! Domain events.
//!
//! Events are produced by:
//! - the boiler and brew-button watchers (level-triggered, one per poll
//!   while the condition holds)
//! - the pot watcher (edge-triggered, one per physical transition)
//! - the brewing cycle (cycle started / completed)
//!
//! and consumed by the [`Coordinator`](crate::coordinator::Coordinator),
//! which reacts to each exactly once, synchronously. An event carries no
//! payload — its identity is the kind itself.

/// The eight event kinds flowing through the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainEvent {
    /// Boiler has run out of water (level-triggered).
    BoilerEmpty,
    /// Brew button read as pushed this poll (level-triggered).
    BrewButtonPushed,
    /// Pot taken off the warmer plate.
    PotRemoved,
    /// Pot put back on the warmer plate.
    PotReturned,
    /// Pot went from empty to holding coffee.
    CoffeeInPot,
    /// Pot went from holding coffee to empty.
    PotEmpty,
    /// A brewing cycle started.
    BrewingCycleStarted,
    /// A brewing cycle ran the boiler dry and finished.
    BrewingCycleCompleted,
}
