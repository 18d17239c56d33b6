//! Highlight resolution
//!
//! Maps the current phase of a trace to the listing lines the code pane
//! should emphasize. The mapping is read straight off the construct's phase
//! table; nothing here re-derives which fragment a phase touches.

use crate::constructs::ConstructSpec;
use crate::trace::state::TraceState;

/// Resolve the set of listing lines to highlight for `state`.
///
/// Returns the lines registered for the current phase, plus the phase's
/// registered exit lines once the trace is done (so a final failing
/// condition check also lights up the loop's exit point). Every phase in
/// every construct table registers at least one line, so the result is only
/// empty for a phase missing from the table.
pub fn resolve(spec: &ConstructSpec, state: &TraceState) -> Vec<usize> {
    let Some(descriptor) = spec.phase(state.phase) else {
        return Vec::new();
    };

    let mut lines = descriptor.lines.to_vec();
    if state.done {
        for &line in descriptor.exit_lines {
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
    }
    lines.sort_unstable();
    lines
}
