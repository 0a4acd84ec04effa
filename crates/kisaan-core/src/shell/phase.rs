//! Shell lifecycle phases.

use serde::{Deserialize, Serialize};

/// The three phases of the shell lifecycle, in order.
///
/// Splash always runs for its full duration first. Unauthenticated is
/// skipped when a valid session was loaded during the splash phase;
/// logout moves the shell from Authenticated back to Unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellPhase {
    /// Initial fixed-duration loading phase
    Splash,
    /// Login screen is showing; awaiting a credential submission
    Unauthenticated,
    /// Shell chrome and panels are rendered
    Authenticated,
}
