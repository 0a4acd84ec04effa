//! Simulated environmental telemetry.
//!
//! No real sensor ingestion exists: readings are produced client-side by
//! randomly perturbing the previous snapshot on a fixed tick.

pub mod simulator;
pub mod snapshot;

pub use simulator::{TelemetrySimulator, TICK_INTERVAL};
pub use snapshot::TelemetrySnapshot;
