//! Phase identifiers and per-phase display metadata
//!
//! A [`Phase`] names one point in a construct's control-flow graph. The full
//! set of identifiers is shared crate-wide, but each construct only uses the
//! subset listed in its phase table, and identifiers are only meaningful
//! within that construct (`Body` in a `for` loop and `Body` in a `do-while`
//! are unrelated points).
//!
//! A [`PhaseDescriptor`] carries everything the UI needs to present a phase:
//! a short label, the code fragment the phase corresponds to, a one-line
//! explanation, and the listing lines to highlight while the trace sits in
//! that phase.

use std::fmt;

/// A named point in a construct's control-flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    // Counting for loop
    Init,
    Condition,
    Body,
    Update,

    // for...of loop
    DeclareCollection,
    StartLoop,
    Advance,

    // do-while loop (shares Init/Body/Condition)
    Increment,

    // if/else
    CheckCondition,
    ThenBranch,
    ElseBranch,

    // if/else-if/else (shares ThenBranch/ElseBranch)
    CheckFirstCondition,
    CheckSecondCondition,
    ElseIfBranch,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "Init",
            Phase::Condition => "Condition",
            Phase::Body => "Body",
            Phase::Update => "Update",
            Phase::DeclareCollection => "DeclareCollection",
            Phase::StartLoop => "StartLoop",
            Phase::Advance => "Advance",
            Phase::Increment => "Increment",
            Phase::CheckCondition => "CheckCondition",
            Phase::ThenBranch => "ThenBranch",
            Phase::ElseBranch => "ElseBranch",
            Phase::CheckFirstCondition => "CheckFirstCondition",
            Phase::CheckSecondCondition => "CheckSecondCondition",
            Phase::ElseIfBranch => "ElseIfBranch",
        };
        write!(f, "{}", name)
    }
}

/// Display metadata for one phase of one construct.
///
/// `lines` indexes into the construct's rendered listing (0-based). The
/// `exit_lines` are added on top of `lines` once the trace is done, so a
/// final failing condition check can also light up the loop's exit point.
#[derive(Debug, Clone, Copy)]
pub struct PhaseDescriptor {
    pub id: Phase,
    pub label: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    pub lines: &'static [usize],
    pub exit_lines: &'static [usize],
}
