//! The stepped-execution trace core: phases, states, the step engine, and
//! the errors it can raise.

pub mod engine;
pub mod errors;
pub mod phase;
pub mod state;

pub use engine::step;
pub use errors::TraceError;
pub use phase::{Phase, PhaseDescriptor};
pub use state::{TraceState, Value};
