pub mod config;
pub mod panels;
pub mod runtime;
pub mod telemetry_feed;

pub use config::ShellConfig;
pub use runtime::Shell;
pub use telemetry_feed::TelemetryFeed;
