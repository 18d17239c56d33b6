//! The two-branch `if/else` statement
//!
//! Phase graph: `CheckCondition → ThenBranch` or `CheckCondition →
//! ElseBranch`. Exactly one branch runs, chosen once, and the trace is done
//! the moment the branch's output is produced.

use crate::constructs::{Comparison, ConstructParams, ConstructSpec};
use crate::trace::errors::TraceError;
use crate::trace::phase::{Phase, PhaseDescriptor};
use crate::trace::state::{TraceState, Value};

pub static SPEC: ConstructSpec = ConstructSpec {
    name: "if-else",
    title: "if/else statement",
    phases: PHASES,
    source,
    init,
    transition,
};

static PHASES: &[PhaseDescriptor] = &[
    PhaseDescriptor {
        id: Phase::CheckCondition,
        label: "Check condition",
        code: "a op b",
        description: "Evaluate the condition once to pick a branch.",
        lines: &[0],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::ThenBranch,
        label: "Then branch",
        code: "console.log(\"condition was true\")",
        description: "The condition held, so only this branch runs.",
        lines: &[1],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::ElseBranch,
        label: "Else branch",
        code: "console.log(\"condition was false\")",
        description: "The condition failed, so only this branch runs.",
        lines: &[3],
        exit_lines: &[],
    },
];

fn operands_of(params: &ConstructParams) -> (i64, i64, Comparison) {
    match params {
        ConstructParams::IfElse { a, b, op } => (*a, *b, *op),
        _ => (0, 0, Comparison::Greater),
    }
}

/// Read the operator back out of the state's variables
pub(crate) fn op_of(state: &TraceState) -> Comparison {
    state
        .variables
        .get("op")
        .and_then(Value::as_str)
        .and_then(Comparison::from_symbol)
        .unwrap_or(Comparison::Greater)
}

fn source(params: &ConstructParams) -> String {
    let (a, b, op) = operands_of(params);
    format!(
        "if ({} {} {}) {{\n  console.log(\"condition was true\");\n}} else {{\n  console.log(\"condition was false\");\n}}",
        a,
        op.symbol(),
        b
    )
}

fn init(params: &ConstructParams) -> TraceState {
    let (a, b, op) = operands_of(params);
    let mut state = TraceState::new(Phase::CheckCondition);
    state.set("a", Value::Int(a));
    state.set("b", Value::Int(b));
    state.set("op", Value::Str(op.symbol().to_string()));
    state
}

fn transition(state: &TraceState) -> Result<TraceState, TraceError> {
    let mut next = state.clone();
    match state.phase {
        Phase::CheckCondition => {
            if op_of(state).apply(state.int("a"), state.int("b")) {
                next.phase = Phase::ThenBranch;
                next.print("condition was true");
            } else {
                next.phase = Phase::ElseBranch;
                next.print("condition was false");
            }
            next.done = true;
        }
        // Branch phases are terminal; a state that lands here without the
        // done flag set just gets it set
        Phase::ThenBranch | Phase::ElseBranch => {
            next.done = true;
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
