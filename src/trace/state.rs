//! Trace state and runtime value representation
//!
//! This module defines [`Value`], the tagged values a construct's variables
//! can take, and [`TraceState`], the snapshot of one in-progress trace.
//!
//! A `TraceState` is never mutated in place by the engine: every transition
//! clones the current state, edits the clone, and returns it. The previous
//! snapshot stays valid, which is what lets the manual-step handler and the
//! autoplay timer share one code path without racing on shared state.

use crate::trace::phase::Phase;
use rustc_hash::FxHashMap;
use std::fmt;

/// Runtime values for construct variables
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
    List(Vec<String>),
    #[default]
    Unset,
}

impl Value {
    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string value, returns None if not a Str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the list value, returns None if not a List
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", item)?;
                }
                write!(f, "]")
            }
            Value::Unset => write!(f, "-"),
        }
    }
}

/// Snapshot of one in-progress trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceState {
    /// Current point in the construct's control-flow graph
    pub phase: Phase,

    /// Construct-specific variables (loop counter, cursor, operands)
    pub variables: FxHashMap<&'static str, Value>,

    /// Append-only console output; cleared only by a full reset
    pub output: Vec<String>,

    /// True once the construct has reached its terminal point; further
    /// transitions are identity
    pub done: bool,

    /// Number of completed body executions
    pub iterations: usize,
}

impl TraceState {
    /// Create a fresh state sitting at `phase` with no variables or output
    pub fn new(phase: Phase) -> Self {
        TraceState {
            phase,
            variables: FxHashMap::default(),
            output: Vec::new(),
            done: false,
            iterations: 0,
        }
    }

    /// Set or replace a variable
    pub fn set(&mut self, name: &'static str, value: Value) {
        self.variables.insert(name, value);
    }

    /// Read an integer variable, defaulting to 0 when absent or non-numeric
    pub fn int(&self, name: &str) -> i64 {
        self.variables
            .get(name)
            .and_then(Value::as_int)
            .unwrap_or(0)
    }

    /// Read a list variable, defaulting to empty when absent
    pub fn list(&self, name: &str) -> &[String] {
        self.variables
            .get(name)
            .and_then(Value::as_list)
            .unwrap_or(&[])
    }

    /// Append a line to the console output
    pub fn print(&mut self, text: impl Into<String>) {
        self.output.push(text.into());
    }

    /// Variables sorted by name, for stable display
    pub fn sorted_variables(&self) -> Vec<(&'static str, &Value)> {
        let mut vars: Vec<_> = self.variables.iter().map(|(k, v)| (*k, v)).collect();
        vars.sort_by_key(|(name, _)| *name);
        vars
    }
}
