//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*_pane()` function that takes
//! the data it displays plus its scroll/focus state. Panes are stateless:
//! everything they show comes from the [`Playback`] controller's current
//! state and the construct's phase table.
//!
//! - [`code`]: the rendered listing with phase highlighting
//! - [`trace`]: current phase readout and variable values
//! - [`output`]: accumulated `console.log` output
//! - [`status`]: status bar with keybindings and play state
//!
//! [`Playback`]: crate::playback::Playback

pub mod code;
pub mod output;
pub mod status;
pub mod trace;

pub use code::render_code_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;
