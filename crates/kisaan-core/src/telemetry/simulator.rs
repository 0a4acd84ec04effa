//! Telemetry simulator.
//!
//! Derives each snapshot from the previous one with bounded uniform
//! jitter. The sequence is infinite and stateful: once stepped it cannot
//! be replayed from the original seed.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::snapshot::TelemetrySnapshot;

/// Fixed interval between telemetry ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Produces a continuously-updated snapshot of environmental readings.
///
/// Each call to [`step`](Self::step) perturbs the accumulated state:
///
/// - soil humidity: previous ± up to 1.0, clamped to [0, 100]
/// - temperature: previous ± up to 0.25, unclamped
/// - external humidity: previous ± up to 0.5, clamped to [0, 100]
/// - nitrogen, phosphorus, potassium and soil pH are held constant
pub struct TelemetrySimulator {
    snapshot: TelemetrySnapshot,
    rng: StdRng,
}

impl TelemetrySimulator {
    /// Creates a simulator with fixed initial readings and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            snapshot: TelemetrySnapshot::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic simulator for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            snapshot: TelemetrySnapshot::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a deterministic simulator starting from a given snapshot.
    pub fn with_snapshot(snapshot: TelemetrySnapshot, seed: u64) -> Self {
        Self {
            snapshot,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the current snapshot without advancing the sequence.
    pub fn snapshot(&self) -> &TelemetrySnapshot {
        &self.snapshot
    }

    /// Advances the sequence by one tick and returns the new snapshot.
    pub fn step(&mut self) -> TelemetrySnapshot {
        let next = TelemetrySnapshot {
            soil_humidity: (self.snapshot.soil_humidity + self.rng.gen_range(-1.0..=1.0))
                .clamp(0.0, 100.0),
            temperature: self.snapshot.temperature + self.rng.gen_range(-0.25..=0.25),
            external_humidity: (self.snapshot.external_humidity + self.rng.gen_range(-0.5..=0.5))
                .clamp(0.0, 100.0),
            ..self.snapshot
        };
        self.snapshot = next;
        next
    }
}

impl Default for TelemetrySimulator {
    fn default() -> Self {
        Self::new()
    }
}
