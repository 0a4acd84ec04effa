//! The application shell runtime.
//!
//! Composes the session store, the telemetry feed and the pure state
//! machine from `kisaan-core`. All transitions run through [`Shell`],
//! which is the single owner of the in-memory state.

use std::sync::Arc;

use kisaan_core::error::Result;
use kisaan_core::session::{Session, SessionStore};
use kisaan_core::shell::{ShellPhase, ShellState};
use kisaan_core::telemetry::{TelemetrySimulator, TelemetrySnapshot};
use kisaan_core::view::ViewSelector;
use tokio::sync::watch;
use tokio::time::sleep;

use crate::config::ShellConfig;
use crate::telemetry_feed::TelemetryFeed;

/// The mounted application shell.
pub struct Shell {
    store: Arc<dyn SessionStore>,
    state: ShellState,
    feed: TelemetryFeed,
}

impl Shell {
    /// Mounts the shell: starts the telemetry feed, runs the splash
    /// phase, and lands in Unauthenticated or Authenticated depending
    /// on what the store held.
    ///
    /// The session load runs alongside the splash timer, but the
    /// transition waits for the timer: even an instant load never
    /// shortens the splash. A load error is treated as "no session".
    pub async fn mount(store: Arc<dyn SessionStore>, config: ShellConfig) -> Self {
        Self::mount_with_simulator(store, config, TelemetrySimulator::new()).await
    }

    /// Like [`mount`](Self::mount) with an explicit simulator, so tests
    /// can seed the telemetry sequence.
    pub async fn mount_with_simulator(
        store: Arc<dyn SessionStore>,
        config: ShellConfig,
        simulator: TelemetrySimulator,
    ) -> Self {
        let feed = TelemetryFeed::spawn(simulator, config.tick_interval);

        tracing::info!("[Shell] Splash phase started");
        let (loaded, _) = tokio::join!(store.load(), sleep(config.splash_duration));
        let loaded = loaded.unwrap_or_else(|e| {
            tracing::warn!("[Shell] Session load failed, continuing without: {}", e);
            None
        });

        let state = ShellState::new().splash_finished(loaded);
        tracing::info!("[Shell] Entered {:?} phase", state.phase());

        Self { store, state, feed }
    }

    /// The current state snapshot.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// The latest telemetry snapshot.
    pub fn telemetry(&self) -> TelemetrySnapshot {
        self.feed.latest()
    }

    /// A receiver observing every subsequent telemetry snapshot.
    pub fn subscribe_telemetry(&self) -> watch::Receiver<TelemetrySnapshot> {
        self.feed.subscribe()
    }

    /// Handles a credential submission from the login collaborator:
    /// persists the session, then adopts it in memory.
    pub async fn login(&mut self, session: Session) -> Result<()> {
        if self.state.phase() != ShellPhase::Unauthenticated {
            tracing::warn!("[Shell] Ignoring login outside the unauthenticated phase");
            return Ok(());
        }
        self.store.save(&session).await?;
        tracing::info!("[Shell] {} signed in", session.name);
        self.state = self.state.clone().login(session);
        Ok(())
    }

    /// Clears the stored session, discards the in-memory copy and
    /// resets the view to the dashboard.
    pub async fn logout(&mut self) -> Result<()> {
        if self.state.phase() != ShellPhase::Authenticated {
            tracing::warn!("[Shell] Ignoring logout outside the authenticated phase");
            return Ok(());
        }
        self.store.clear().await?;
        tracing::info!("[Shell] Signed out");
        self.state = self.state.clone().logout();
        Ok(())
    }

    /// Navigates to a panel (closes the sidebar as a side effect).
    pub fn navigate(&mut self, view: ViewSelector) {
        self.state = self.state.clone().navigate(view);
    }

    /// Toggles the narrow-viewport sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.state = self.state.clone().toggle_sidebar();
    }

    /// Tears the shell down, stopping the telemetry task.
    pub async fn shutdown(mut self) {
        self.feed.shutdown().await;
        tracing::info!("[Shell] Teardown complete");
    }
}
