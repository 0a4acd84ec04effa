//! The application shell's lifecycle state machine.

pub mod phase;
pub mod state;

pub use phase::ShellPhase;
pub use state::ShellState;
