//! Polling watchers — raw hardware readings in, domain events out.
//!
//! Each watcher owns a cooperative polling loop: `start()` arms the watch
//! flag, `run()` checks it once per iteration and sleeps for the poll
//! interval in between, `stop()` clears it. Stopping never preempts an
//! in-flight poll or its pending delay, so stop latency is bounded by one
//! poll interval.
//!
//! Notification policy is deliberately asymmetric:
//! - [`BoilerWatcher`] and [`BrewButtonWatcher`] are **level-triggered** —
//!   they republish their event on every poll while the condition holds
//!   (a held button produces one event per poll, not one per press).
//! - [`PotWatcher`] is **edge-triggered** — position and content events
//!   fire once per physical transition, never once per poll.
//!
//! Every watcher also exposes its single-poll check as a plain method, so
//! tests and simulations can drive polls deterministically without timers.

mod boiler;
mod brew_button;
mod pot;

pub use boiler::BoilerWatcher;
pub use brew_button::BrewButtonWatcher;
pub use pot::{PotPosition, PotWatcher};
