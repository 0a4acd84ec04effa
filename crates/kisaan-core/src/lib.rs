pub mod analyzer;
pub mod error;
pub mod marketplace;
pub mod session;
pub mod shell;
pub mod telemetry;
pub mod view;

// Re-export common error type
pub use error::{KisaanError, Result};
