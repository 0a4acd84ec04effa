//! Shell timing configuration.

use std::time::Duration;

use kisaan_core::telemetry::TICK_INTERVAL;

/// Duration of the splash phase.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2500);

/// Timer durations for the shell lifecycle.
///
/// Production uses the defaults; tests compress both so lifecycle
/// scenarios finish in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// How long the splash phase lasts, regardless of how quickly the
    /// session load resolves.
    pub splash_duration: Duration,
    /// Interval between telemetry ticks.
    pub tick_interval: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            splash_duration: SPLASH_DURATION,
            tick_interval: TICK_INTERVAL,
        }
    }
}
