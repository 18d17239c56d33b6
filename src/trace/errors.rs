//! Error types for the trace core
//!
//! Both variants signal programmer misuse (a broken phase table or a widget
//! that drives an unconfigured controller), not bad user input. Bad user
//! input is absorbed at construction time by substituting documented
//! defaults, so it never reaches these paths.

use crate::trace::phase::Phase;
use std::fmt;

/// Errors raised by the trace engine and the playback controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The state's phase is not in the construct's phase table
    InvalidPhase {
        construct: &'static str,
        phase: Phase,
    },

    /// The playback controller was driven before any parameters were supplied
    NotInitialized { construct: &'static str },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::InvalidPhase { construct, phase } => {
                write!(
                    f,
                    "Phase '{}' is not part of the '{}' construct",
                    phase, construct
                )
            }
            TraceError::NotInitialized { construct } => {
                write!(
                    f,
                    "Playback for '{}' was driven before configure() supplied parameters",
                    construct
                )
            }
        }
    }
}

impl std::error::Error for TraceError {}
