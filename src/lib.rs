//! # Introduction
//!
//! steptty animates the execution of five basic language constructs —
//! counting `for`, `for...of`, `do-while`, `if/else`, and
//! `if/else-if/else` — one semantic phase at a time, inside a terminal UI
//! built with [ratatui](https://docs.rs/ratatui). Each construct is a
//! hand-authored phase table, not parsed source: the tool teaches how the
//! constructs behave, it does not interpret arbitrary code.
//!
//! ## Execution pipeline
//!
//! ```text
//! Params → ConstructSpec::init → TraceState → step → TraceState → … → done
//!                                    ↑                   │
//!                              Playback (manual / autoplay)
//!                                    │                   ↓
//!                                   TUI  ←  highlight::resolve
//! ```
//!
//! 1. [`constructs`] — one immutable [`ConstructSpec`](constructs::ConstructSpec)
//!    table per construct: phases, listing renderer, and the pure
//!    `init`/`transition` functions.
//! 2. [`trace`] — the data model ([`TraceState`](trace::TraceState),
//!    [`Phase`](trace::Phase), [`Value`](trace::Value)) and the
//!    [`step`](trace::step) engine that applies exactly one transition.
//! 3. [`playback`] — drives a trace by manual single-step or a cooperative
//!    autoplay timer; both modes share the engine's single step path.
//! 4. [`highlight`] — maps the current phase to the listing lines to
//!    emphasize.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported constructs
//!
//! Counting `for` loop, `for...of` loop, `do-while` loop, two-branch
//! `if/else`, three-branch `if/else-if/else` (with short-circuit).

pub mod constructs;
pub mod highlight;
pub mod playback;
pub mod trace;
pub mod ui;
