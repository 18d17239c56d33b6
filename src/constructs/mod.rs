//! Construct tables
//!
//! Each submodule defines one [`ConstructSpec`]: the complete, data-only
//! description of one language construct: its phase table, its listing
//! renderer, and the pure `init`/`transition` functions that give the phases
//! their semantics. The spec is the single source of truth for a construct;
//! adding a new one means adding a table here, nothing else.
//!
//! Specs are `'static` and stateless. Any number of concurrent traces can
//! share one spec; all per-trace data lives in the [`TraceState`].

pub mod do_while;
pub mod else_if;
pub mod for_each;
pub mod for_loop;
pub mod if_else;

use crate::trace::errors::TraceError;
use crate::trace::phase::{Phase, PhaseDescriptor};
use crate::trace::state::TraceState;
use std::fmt;

/// Comparison operators available to the `if/else` family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    /// Parse a JavaScript comparison symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Comparison::Greater),
            "<" => Some(Comparison::Less),
            "===" => Some(Comparison::Equal),
            "!==" => Some(Comparison::NotEqual),
            ">=" => Some(Comparison::GreaterEqual),
            "<=" => Some(Comparison::LessEqual),
            _ => None,
        }
    }

    /// The JavaScript symbol for this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::Equal => "===",
            Comparison::NotEqual => "!==",
            Comparison::GreaterEqual => ">=",
            Comparison::LessEqual => "<=",
        }
    }

    /// Evaluate `a <op> b`
    pub fn apply(self, a: i64, b: i64) -> bool {
        match self {
            Comparison::Greater => a > b,
            Comparison::Less => a < b,
            Comparison::Equal => a == b,
            Comparison::NotEqual => a != b,
            Comparison::GreaterEqual => a >= b,
            Comparison::LessEqual => a <= b,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// User-supplied parameters for one trace of one construct.
///
/// Changing these always produces a fresh trace; an in-flight trace is never
/// reconciled with edited inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructParams {
    ForLoop { bound: i64 },
    ForEach { items: Vec<String> },
    DoWhile { start: i64, end: i64 },
    IfElse { a: i64, b: i64, op: Comparison },
    ElseIfChain { a: i64, b: i64, op: Comparison },
}

/// The immutable description of one language construct.
pub struct ConstructSpec {
    /// Short name used on the command line (e.g. `for`, `do-while`)
    pub name: &'static str,

    /// Human-readable title shown in the code pane
    pub title: &'static str,

    /// Phase table, in presentation order
    pub phases: &'static [PhaseDescriptor],

    /// Render the code listing with the user's parameters substituted in
    pub source: fn(&ConstructParams) -> String,

    /// Build the first state of a trace. Total over all parameter values:
    /// out-of-range or mismatched parameters fall back to documented
    /// defaults instead of failing.
    pub init: fn(&ConstructParams) -> TraceState,

    /// Apply one phase transition. The engine guarantees the input state is
    /// not done and its phase is in `phases`.
    pub transition: fn(&TraceState) -> Result<TraceState, TraceError>,
}

impl ConstructSpec {
    /// Look up the descriptor for a phase, or None if the phase is not part
    /// of this construct
    pub fn phase(&self, id: Phase) -> Option<&PhaseDescriptor> {
        self.phases.iter().find(|p| p.id == id)
    }
}

static ALL: [&ConstructSpec; 5] = [
    &for_loop::SPEC,
    &for_each::SPEC,
    &do_while::SPEC,
    &if_else::SPEC,
    &else_if::SPEC,
];

/// All construct specs, in menu order
pub fn all() -> &'static [&'static ConstructSpec] {
    &ALL
}

/// Find a construct spec by its command-line name
pub fn find(name: &str) -> Option<&'static ConstructSpec> {
    all().iter().copied().find(|spec| spec.name == name)
}
