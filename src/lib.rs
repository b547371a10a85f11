//! Brewmatic control library.
//!
//! Event-driven control core for an automated drip brewer: watchers poll
//! the hardware readouts, publish domain events, and a coordinator drives
//! the brewing and warming cycles in response. Everything is pure logic
//! over the [`hardware::HardwareApi`] trait; [`sim::SimulatedHardware`]
//! stands in for the real machine in tests and simulations.

#![deny(unused_must_use)]

pub mod config;
pub mod coordinator;
pub mod cycle;
pub mod error;
pub mod events;
pub mod hardware;
pub mod machine;
pub mod notify;
pub mod sim;
pub mod watch;
