//! The `do-while` loop
//!
//! Phase graph: `Init → Body → Increment → Condition → Body → …`. The first
//! `Body` entry comes straight from `Init`, not through `Condition`; the
//! body always runs at least once, which is the defining difference from
//! the counting `for` loop. The condition `i <= end` is checked only after
//! each increment, so `start > end` still prints `start` exactly once.

use crate::constructs::{ConstructParams, ConstructSpec};
use crate::trace::errors::TraceError;
use crate::trace::phase::{Phase, PhaseDescriptor};
use crate::trace::state::{TraceState, Value};

pub static SPEC: ConstructSpec = ConstructSpec {
    name: "do-while",
    title: "do-while loop",
    phases: PHASES,
    source,
    init,
    transition,
};

static PHASES: &[PhaseDescriptor] = &[
    PhaseDescriptor {
        id: Phase::Init,
        label: "Initialize",
        code: "let i = start",
        description: "Declare the counter and set it to the starting value.",
        lines: &[0],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::Body,
        label: "Run body",
        code: "console.log(i)",
        description: "Run the body; unconditionally the first time through.",
        lines: &[2],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::Increment,
        label: "Increment",
        code: "i++",
        description: "Increment the counter.",
        lines: &[3],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::Condition,
        label: "Check condition",
        code: "i <= end",
        description: "Check whether to run the body again; the loop ends when this is false.",
        lines: &[4],
        exit_lines: &[],
    },
];

fn range_of(params: &ConstructParams) -> (i64, i64) {
    match params {
        ConstructParams::DoWhile { start, end } => (*start, *end),
        _ => (0, 0),
    }
}

fn source(params: &ConstructParams) -> String {
    let (start, end) = range_of(params);
    format!(
        "let i = {};\ndo {{\n  console.log(i);\n  i++;\n}} while (i <= {});",
        start, end
    )
}

fn init(params: &ConstructParams) -> TraceState {
    let (start, end) = range_of(params);
    let mut state = TraceState::new(Phase::Init);
    state.set("i", Value::Int(start));
    state.set("end", Value::Int(end));
    state
}

fn transition(state: &TraceState) -> Result<TraceState, TraceError> {
    let mut next = state.clone();
    match state.phase {
        // Init and a passing Condition both enter the body
        Phase::Init | Phase::Condition => {
            next.phase = Phase::Body;
            next.print(state.int("i").to_string());
            next.iterations += 1;
        }
        Phase::Body => {
            next.phase = Phase::Increment;
            // Saturating: an extreme start value must end the trace, not panic it
            next.set("i", Value::Int(state.int("i").saturating_add(1)));
        }
        Phase::Increment => {
            next.phase = Phase::Condition;
            if state.int("i") > state.int("end") {
                next.done = true;
            }
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
