//! The `for...of` loop
//!
//! Phase graph: `DeclareCollection → StartLoop → Body → Advance → Body → …`.
//! `Advance` either moves the cursor to the next element and loops back to
//! `Body`, or marks the trace done when the collection is exhausted. The
//! collection itself is fixed when the trace is created and never changes.
//!
//! An empty collection ends the trace at `StartLoop` with zero body visits.

use crate::constructs::{ConstructParams, ConstructSpec};
use crate::trace::errors::TraceError;
use crate::trace::phase::{Phase, PhaseDescriptor};
use crate::trace::state::{TraceState, Value};

pub static SPEC: ConstructSpec = ConstructSpec {
    name: "for-each",
    title: "for...of loop",
    phases: PHASES,
    source,
    init,
    transition,
};

static PHASES: &[PhaseDescriptor] = &[
    PhaseDescriptor {
        id: Phase::DeclareCollection,
        label: "Declare collection",
        code: "const fruits = [...]",
        description: "Create the array the loop will walk over.",
        lines: &[0],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::StartLoop,
        label: "Start loop",
        code: "const fruit of fruits",
        description: "Point the loop at the first element of the array.",
        lines: &[1],
        exit_lines: &[3],
    },
    PhaseDescriptor {
        id: Phase::Body,
        label: "Run body",
        code: "console.log(fruit)",
        description: "Run the loop body with the current element.",
        lines: &[2],
        exit_lines: &[],
    },
    PhaseDescriptor {
        id: Phase::Advance,
        label: "Advance",
        code: "const fruit of fruits",
        description: "Move to the next element, or leave the loop when none are left.",
        lines: &[1],
        exit_lines: &[3],
    },
];

fn items_of(params: &ConstructParams) -> Vec<String> {
    match params {
        ConstructParams::ForEach { items } => items.clone(),
        _ => Vec::new(),
    }
}

fn source(params: &ConstructParams) -> String {
    let items = items_of(params);
    let rendered: Vec<String> = items.iter().map(|item| format!("\"{}\"", item)).collect();
    format!(
        "const fruits = [{}];\nfor (const fruit of fruits) {{\n  console.log(fruit);\n}}",
        rendered.join(", ")
    )
}

fn init(params: &ConstructParams) -> TraceState {
    let mut state = TraceState::new(Phase::DeclareCollection);
    state.set("fruits", Value::List(items_of(params)));
    state
}

fn transition(state: &TraceState) -> Result<TraceState, TraceError> {
    let mut next = state.clone();
    match state.phase {
        Phase::DeclareCollection => {
            next.phase = Phase::StartLoop;
            let items = state.list("fruits");
            if items.is_empty() {
                next.done = true;
            } else {
                next.set("index", Value::Int(0));
                next.set("fruit", Value::Str(items[0].clone()));
            }
        }
        Phase::StartLoop | Phase::Advance => {
            next.phase = Phase::Body;
            let current = state
                .variables
                .get("fruit")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            next.print(current);
            next.iterations += 1;
        }
        Phase::Body => {
            next.phase = Phase::Advance;
            let items = state.list("fruits");
            let cursor = state.int("index") + 1;
            next.set("index", Value::Int(cursor));
            if cursor as usize >= items.len() {
                next.done = true;
            } else {
                next.set("fruit", Value::Str(items[cursor as usize].clone()));
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
