//! Playback controller
//!
//! [`Playback`] owns the single authoritative [`TraceState`] for one widget
//! and drives it in two modes: manual single-step and timed autoplay. Both
//! modes funnel through the same internal `apply` path, which calls the pure
//! [`trace::step`](crate::trace::step) engine; there is no second
//! bookkeeping of counters or flags that the two modes could let drift
//! apart.
//!
//! The timer is cooperative, in the style of the TUI event loop: the owner
//! calls [`Playback::poll`] regularly with the current instant, and a step
//! fires when the armed interval has elapsed. At most one timer exists per
//! controller: arming again replaces the previous one, and any manual
//! interaction (step, reset, reconfigure) cancels it first. Autoplay
//! disarms itself the moment the trace is done, so no tick fires after
//! termination.

use crate::constructs::{ConstructParams, ConstructSpec};
use crate::highlight;
use crate::trace::engine;
use crate::trace::errors::TraceError;
use crate::trace::state::TraceState;
use std::time::{Duration, Instant};

/// Autoplay interval used by the UI; slow enough to read each phase
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(900);

/// Notification published to the observer after every applied step or reset
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub state: TraceState,
    pub highlights: Vec<usize>,
}

/// The armed autoplay timer
struct AutoplayTimer {
    interval: Duration,
    last_tick: Instant,
}

/// Drives one trace of one construct.
pub struct Playback {
    spec: &'static ConstructSpec,
    params: Option<ConstructParams>,
    current: Option<TraceState>,
    timer: Option<AutoplayTimer>,
    observer: Option<Box<dyn FnMut(&StateChange)>>,
}

impl Playback {
    /// Create an unconfigured controller. Driving it before
    /// [`configure`](Playback::configure) is a wiring bug and fails with
    /// [`TraceError::NotInitialized`].
    pub fn new(spec: &'static ConstructSpec) -> Self {
        Playback {
            spec,
            params: None,
            current: None,
            timer: None,
            observer: None,
        }
    }

    /// Create a controller and configure it in one go
    pub fn with_params(spec: &'static ConstructSpec, params: ConstructParams) -> Self {
        let mut playback = Self::new(spec);
        playback.configure(params);
        playback
    }

    pub fn spec(&self) -> &'static ConstructSpec {
        self.spec
    }

    /// The parameters of the current trace, if configured
    pub fn params(&self) -> Option<&ConstructParams> {
        self.params.as_ref()
    }

    /// The current state, if configured
    pub fn state(&self) -> Option<&TraceState> {
        self.current.as_ref()
    }

    /// The highlight set for the current state
    pub fn highlights(&self) -> Vec<usize> {
        match &self.current {
            Some(state) => highlight::resolve(self.spec, state),
            None => Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Register the single observer notified after every applied step/reset
    pub fn set_observer(&mut self, observer: Box<dyn FnMut(&StateChange)>) {
        self.observer = Some(observer);
    }

    /// Supply (or replace) the trace parameters.
    ///
    /// Always starts a fresh trace from `init(params)` (an in-flight trace
    /// is never reconciled with edited inputs) and cancels any armed timer.
    pub fn configure(&mut self, params: ConstructParams) {
        self.timer = None;
        let initial = (self.spec.init)(&params);
        self.params = Some(params);
        self.current = Some(initial);
        self.notify();
    }

    /// Discard the current trace and recompute the initial state from the
    /// stored parameters. Cancels any armed timer.
    pub fn reset(&mut self) -> Result<(), TraceError> {
        let params = self.params.clone().ok_or(TraceError::NotInitialized {
            construct: self.spec.name,
        })?;
        self.timer = None;
        self.current = Some((self.spec.init)(&params));
        self.notify();
        Ok(())
    }

    /// Apply one manual step. Pauses autoplay first (pause-on-interact), so
    /// a user click and a timer tick can never double-apply a phase. A
    /// no-op once the trace is done.
    pub fn step_once(&mut self) -> Result<(), TraceError> {
        self.timer = None;
        self.apply()
    }

    /// Arm the autoplay timer. Re-arming while already playing replaces the
    /// timer (full interval from `now`), it never stacks a second one.
    /// Arming a finished trace is a no-op.
    pub fn play(&mut self, interval: Duration, now: Instant) -> Result<(), TraceError> {
        let state = self.current.as_ref().ok_or(TraceError::NotInitialized {
            construct: self.spec.name,
        })?;
        if state.done {
            self.timer = None;
            return Ok(());
        }
        self.timer = Some(AutoplayTimer {
            interval,
            last_tick: now,
        });
        Ok(())
    }

    /// Cancel the autoplay timer without touching the trace state
    pub fn pause(&mut self) {
        self.timer = None;
    }

    /// Fire at most one autoplay tick if the armed interval has elapsed.
    ///
    /// Returns true if a step was applied. Disarms the timer as soon as the
    /// resulting state is done.
    pub fn poll(&mut self, now: Instant) -> Result<bool, TraceError> {
        let due = match &self.timer {
            Some(timer) => now.duration_since(timer.last_tick) >= timer.interval,
            None => false,
        };
        if !due {
            return Ok(false);
        }

        self.apply()?;
        if let Some(timer) = &mut self.timer {
            timer.last_tick = now;
        }
        if self.current.as_ref().is_some_and(|s| s.done) {
            self.timer = None;
        }
        Ok(true)
    }

    /// The one code path that advances the trace, shared by both drive modes
    fn apply(&mut self) -> Result<(), TraceError> {
        let state = self.current.as_ref().ok_or(TraceError::NotInitialized {
            construct: self.spec.name,
        })?;
        if state.done {
            return Ok(());
        }
        let next = engine::step(self.spec, state)?;
        self.current = Some(next);
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        let (Some(state), Some(observer)) = (&self.current, &mut self.observer) else {
            return;
        };
        let change = StateChange {
            state: state.clone(),
            highlights: highlight::resolve(self.spec, state),
        };
        observer(&change);
    }
}
