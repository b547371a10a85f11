//! Brewing-cycle state machine.
//!
//! Explicit three-state machine over a `match` transition table:
//!
//! ```text
//!                StartCycle (guard passes)
//!  READY-TO-START ───────────────────────▶ IN-PROGRESS
//!        ▲                                   │     ▲
//!        │ BoilerIsEmpty          PauseCycle │     │ ResumeCycle
//!        ├───────────────────◀───────────────▼─────┘
//!        │ BoilerIsEmpty
//!        └───────────────────◀── PAUSED
//! ```
//!
//! Any (state, event) pair not in the table is a silent no-op: no state
//! change, no hardware command, no notification. The cycle owns the boiler
//! heat and the relief valve; it is not internally synchronized — callers
//! serialize access by running everything on one executor thread.

use std::rc::Rc;

use core::cell::Cell;

use log::{info, warn};

use crate::error::StartRejection;
use crate::events::DomainEvent;
use crate::hardware::{
    BoilerHeat, BoilerReading, HardwareApi, ReliefValve, WarmerPlateReading,
};
use crate::notify::{Listener, Notifier, Subscription};

/// The three brewing-cycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Initial state, re-entered whenever a cycle completes.
    ReadyToStart,
    InProgress,
    Paused,
}

/// Events the transition table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleEvent {
    StartCycle,
    BoilerIsEmpty,
    PauseCycle,
    ResumeCycle,
}

// ───────────────────────────────────────────────────────────────
// Start-request collaborator
// ───────────────────────────────────────────────────────────────

/// Receives the outcome of one [`BrewingCycle::start`] call.
///
/// On a rejected start exactly one of the two callbacks fires; on success
/// neither does (the [`DomainEvent::BrewingCycleStarted`] notification is
/// the success signal).
pub trait StartBrewingRequest {
    /// The warmer plate is empty — nothing to brew into.
    fn cannot_start_pot_not_in_warmer(&self);

    /// The boiler holds no water.
    fn cannot_start_boiler_empty(&self);
}

/// Default request collaborator: records the rejection and logs it.
pub struct LoggedStartRequest {
    rejection: Cell<Option<StartRejection>>,
}

impl LoggedStartRequest {
    pub fn new() -> Self {
        Self {
            rejection: Cell::new(None),
        }
    }

    /// The rejection reported to this request, if any.
    pub fn rejection(&self) -> Option<StartRejection> {
        self.rejection.get()
    }
}

impl Default for LoggedStartRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl StartBrewingRequest for LoggedStartRequest {
    fn cannot_start_pot_not_in_warmer(&self) {
        warn!("cannot start brewing: {}", StartRejection::PotNotInWarmer);
        self.rejection.set(Some(StartRejection::PotNotInWarmer));
    }

    fn cannot_start_boiler_empty(&self) {
        warn!("cannot start brewing: {}", StartRejection::BoilerEmpty);
        self.rejection.set(Some(StartRejection::BoilerEmpty));
    }
}

// ───────────────────────────────────────────────────────────────
// The state machine
// ───────────────────────────────────────────────────────────────

/// Owns the boiler heat and relief valve; guards cycle start; exposes
/// pause/resume and the boiler-empty completion path.
pub struct BrewingCycle {
    hw: Rc<dyn HardwareApi>,
    events: Notifier<DomainEvent>,
    state: Cell<CycleState>,
}

impl BrewingCycle {
    pub fn new(hw: Rc<dyn HardwareApi>) -> Self {
        Self {
            hw,
            events: Notifier::new(),
            state: Cell::new(CycleState::ReadyToStart),
        }
    }

    /// Register a listener for `BrewingCycleStarted` / `BrewingCycleCompleted`.
    pub fn subscribe(&self, listener: Listener<DomainEvent>) -> Subscription<DomainEvent> {
        self.events.subscribe(listener)
    }

    /// Current state.
    pub fn state(&self) -> CycleState {
        self.state.get()
    }

    /// Try to start a cycle.
    ///
    /// Outside `ReadyToStart` this is a complete no-op — the guard is not
    /// even evaluated, so `request` sees no callback. In `ReadyToStart`
    /// the guard runs first: a rejected start reports its reason through
    /// `request` and touches no hardware.
    pub fn start(&self, request: &dyn StartBrewingRequest) {
        if self.state.get() != CycleState::ReadyToStart {
            return;
        }
        if self.can_start(request) {
            self.raise(CycleEvent::StartCycle);
        }
    }

    /// Pause a cycle in progress (valve open vents the boiler so brewing
    /// stops immediately). No-op outside `InProgress`.
    pub fn pause(&self) {
        self.raise(CycleEvent::PauseCycle);
    }

    /// Resume a paused cycle. No-op outside `Paused`.
    pub fn resume(&self) {
        self.raise(CycleEvent::ResumeCycle);
    }

    /// The boiler ran dry: finish the cycle. No-op in `ReadyToStart`.
    pub fn boiler_empty(&self) {
        self.raise(CycleEvent::BoilerIsEmpty);
    }

    // ── Internal ──────────────────────────────────────────────

    /// Start guard. Reports at most one rejection; no hardware writes.
    fn can_start(&self, request: &dyn StartBrewingRequest) -> bool {
        if self.hw.warmer_plate_reading() == WarmerPlateReading::NoPot {
            request.cannot_start_pot_not_in_warmer();
            return false;
        }
        if self.hw.boiler_reading() != BoilerReading::NotEmpty {
            request.cannot_start_boiler_empty();
            return false;
        }
        true
    }

    /// The transition table. Unlisted (state, event) pairs fall through
    /// to the no-op arm.
    fn raise(&self, event: CycleEvent) {
        use CycleEvent::{BoilerIsEmpty, PauseCycle, ResumeCycle, StartCycle};
        use CycleState::{InProgress, Paused, ReadyToStart};

        match (self.state.get(), event) {
            (ReadyToStart, StartCycle) => {
                self.transition(InProgress);
                self.events.publish(&DomainEvent::BrewingCycleStarted);
                self.hw.set_relief_valve(ReliefValve::Closed);
                self.hw.set_boiler_heat(BoilerHeat::On);
            }
            (InProgress | Paused, BoilerIsEmpty) => {
                self.hw.set_relief_valve(ReliefValve::Closed);
                self.hw.set_boiler_heat(BoilerHeat::Off);
                self.transition(ReadyToStart);
                self.events.publish(&DomainEvent::BrewingCycleCompleted);
            }
            (InProgress, PauseCycle) => {
                self.hw.set_relief_valve(ReliefValve::Open);
                self.hw.set_boiler_heat(BoilerHeat::Off);
                self.transition(Paused);
            }
            (Paused, ResumeCycle) => {
                self.hw.set_relief_valve(ReliefValve::Closed);
                self.hw.set_boiler_heat(BoilerHeat::On);
                self.transition(InProgress);
            }
            _ => {}
        }
    }

    fn transition(&self, next: CycleState) {
        info!("brewing cycle: {:?} -> {:?}", self.state.get(), next);
        self.state.set(next);
    }
}
