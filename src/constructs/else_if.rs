//! The three-branch `if/else-if/else` chain
//!
//! Phase graph: `CheckFirstCondition → ThenBranch` when the user's operator
//! holds; `CheckSecondCondition` is never visited in that case (the chain
//! short-circuits). Otherwise `CheckFirstCondition → CheckSecondCondition →
//! ElseIfBranch` when `a === b`, else `→ ElseBranch`. Only the first true
//! condition's branch runs, and the trace is done right after it.

use crate::constructs::if_else::op_of;
use crate::constructs::{Comparison, ConstructParams, ConstructSpec};
use crate::trace::errors::TraceError;
use crate::trace::phase::{Phase, PhaseDescriptor};
use crate::trace::state::{TraceState, Value};

pub static SPEC: ConstructSpec = ConstructSpec {
    name: "else-if",
    title: "if/else-if/else chain",
    phases: PHASES,
    source,
    init,
    transition,
};

static PHASES: &[PhaseDescriptor] = &[
    PhaseDescriptor {
        id: Phase::CheckFirstCondition,
        label: "Check first condition",
        code: "a op b",
        description: "Evaluate the first condition; if it holds, the rest of the chain is skipped.",
        lines: &[0],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::CheckSecondCondition,
        label: "Check second condition",
        code: "a === b",
        description: "Only reached when the first condition failed.",
        lines: &[2],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::ThenBranch,
        label: "First branch",
        code: "console.log(\"first condition matched\")",
        description: "The first condition held, so only this branch runs.",
        lines: &[1],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::ElseIfBranch,
        label: "Else-if branch",
        code: "console.log(\"second condition matched\")",
        description: "The second condition held, so only this branch runs.",
        lines: &[3],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::ElseBranch,
        label: "Else branch",
        code: "console.log(\"no condition matched\")",
        description: "No condition held, so the fallback branch runs.",
        lines: &[5],
        exit_lines: &[],
    },
];

fn operands_of(params: &ConstructParams) -> (i64, i64, Comparison) {
    match params {
        ConstructParams::ElseIfChain { a, b, op } => (*a, *b, *op),
        _ => (0, 0, Comparison::Greater),
    }
}

fn source(params: &ConstructParams) -> String {
    let (a, b, op) = operands_of(params);
    format!(
        "if ({a} {op} {b}) {{\n  console.log(\"first condition matched\");\n}} else if ({a} === {b}) {{\n  console.log(\"second condition matched\");\n}} else {{\n  console.log(\"no condition matched\");\n}}",
        a = a,
        b = b,
        op = op.symbol()
    )
}

fn init(params: &ConstructParams) -> TraceState {
    let (a, b, op) = operands_of(params);
    let mut state = TraceState::new(Phase::CheckFirstCondition);
    state.set("a", Value::Int(a));
    state.set("b", Value::Int(b));
    state.set("op", Value::Str(op.symbol().to_string()));
    state
}

fn transition(state: &TraceState) -> Result<TraceState, TraceError> {
    let mut next = state.clone();
    match state.phase {
        Phase::CheckFirstCondition => {
            if op_of(state).apply(state.int("a"), state.int("b")) {
                next.phase = Phase::ThenBranch;
                next.print("first condition matched");
                next.done = true;
            } else {
                next.phase = Phase::CheckSecondCondition;
            }
        }
        Phase::CheckSecondCondition => {
            if state.int("a") == state.int("b") {
                next.phase = Phase::ElseIfBranch;
                next.print("second condition matched");
            } else {
                next.phase = Phase::ElseBranch;
                next.print("no condition matched");
            }
            next.done = true;
        }
        // Branch phases are terminal
        Phase::ThenBranch | Phase::ElseIfBranch | Phase::ElseBranch => {
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
