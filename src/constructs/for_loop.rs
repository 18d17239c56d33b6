//! The counting `for` loop
//!
//! Phase graph: `Init → Condition → Body → Update → Condition → …` until the
//! condition fails. The re-entry edge from `Update` always goes through
//! `Condition`, never straight to `Body`; the counter is re-checked
//! immediately after every increment, so the final increment can never
//! smuggle in an extra body execution.

use crate::constructs::{ConstructParams, ConstructSpec};
use crate::trace::errors::TraceError;
use crate::trace::phase::{Phase, PhaseDescriptor};
use crate::trace::state::{TraceState, Value};

pub static SPEC: ConstructSpec = ConstructSpec {
    name: "for",
    title: "Counting for loop",
    phases: PHASES,
    source,
    init,
    transition,
};

static PHASES: &[PhaseDescriptor] = &[
    PhaseDescriptor {
        id: Phase::Init,
        label: "Initialize",
        code: "let i = 0",
        description: "Declare the loop counter and set it to 0.",
        lines: &[0],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::Condition,
        label: "Check condition",
        code: "i < bound",
        description: "Compare the counter against the bound; the loop ends the moment this is false.",
        lines: &[0],
        exit_lines: &[2],
    },
    PhaseDescriptor {
        id: Phase::Body,
        label: "Run body",
        code: "console.log(i)",
        description: "Run the loop body with the current counter value.",
        lines: &[1],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::Update,
        label: "Update",
        code: "i++",
        description: "Increment the counter, then go back and check the condition again.",
        lines: &[0],
        exit_lines: &[],
    },
];

/// Loop bound with bad input absorbed: mismatched params or a negative
/// bound become 0, which yields a trace that finishes without visiting Body
fn bound_of(params: &ConstructParams) -> i64 {
    match params {
        ConstructParams::ForLoop { bound } => (*bound).max(0),
        _ => 0,
    }
}

fn source(params: &ConstructParams) -> String {
    format!(
        "for (let i = 0; i < {}; i++) {{\n  console.log(i);\n}}",
        bound_of(params)
    )
}

fn init(params: &ConstructParams) -> TraceState {
    let mut state = TraceState::new(Phase::Init);
    state.set("i", Value::Int(0));
    state.set("bound", Value::Int(bound_of(params)));
    state
}

fn transition(state: &TraceState) -> Result<TraceState, TraceError> {
    let mut next = state.clone();
    match state.phase {
        // Init and Update both feed into the condition check
        Phase::Init | Phase::Update => {
            next.phase = Phase::Condition;
            if state.int("i") >= state.int("bound") {
                next.done = true;
            }
        }
        Phase::Condition => {
            next.phase = Phase::Body;
            next.print(state.int("i").to_string());
            next.iterations += 1;
        }
        Phase::Body => {
            next.phase = Phase::Update;
            next.set("i", Value::Int(state.int("i") + 1));
        }
        phase => {
            return Err(TraceError::InvalidPhase {
                construct: SPEC.name,
                phase,
            })
        }
    }
    Ok(next)
}
