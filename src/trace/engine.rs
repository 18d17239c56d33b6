//! The step engine
//!
//! [`step`] is the single chokepoint every drive mode goes through: the
//! manual-step key handler and the autoplay timer both end up here, so the
//! two can never diverge. It is a pure function: the next state is returned,
//! the input state is left untouched, and no side effects escape.

use crate::constructs::ConstructSpec;
use crate::trace::errors::TraceError;
use crate::trace::state::TraceState;

/// Apply exactly one phase transition of `spec` to `state`.
///
/// Once a state is done it is absorbing: `step` returns an identical clone,
/// so repeated invocation (a timer that fires one tick late, a user mashing
/// the step key) is always safe.
///
/// Returns [`TraceError::InvalidPhase`] if `state.phase` is not in the
/// construct's phase table; that is a table or wiring bug, not a
/// recoverable condition.
pub fn step(spec: &ConstructSpec, state: &TraceState) -> Result<TraceState, TraceError> {
    if state.done {
        return Ok(state.clone());
    }

    if spec.phase(state.phase).is_none() {
        return Err(TraceError::InvalidPhase {
            construct: spec.name,
            phase: state.phase,
        });
    }

    (spec.transition)(state)
}
