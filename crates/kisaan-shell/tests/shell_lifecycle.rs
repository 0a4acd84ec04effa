//! End-to-end shell lifecycle scenarios against the in-memory store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use kisaan_core::session::{Session, SessionStore};
use kisaan_core::shell::ShellPhase;
use kisaan_core::telemetry::{TelemetrySimulator, TelemetrySnapshot};
use kisaan_core::view::ViewSelector;
use kisaan_infrastructure::MemorySessionStore;
use kisaan_shell::{Shell, ShellConfig};

fn fast_config() -> ShellConfig {
    ShellConfig {
        splash_duration: Duration::from_millis(40),
        tick_interval: Duration::from_millis(5),
    }
}

fn asha() -> Session {
    Session {
        id: "u1".to_string(),
        name: "Asha".to_string(),
        email: "a@x.com".to_string(),
        farm_name: "Green Acres".to_string(),
    }
}

#[tokio::test]
async fn empty_store_lands_in_unauthenticated_then_login_authenticates() {
    let store = Arc::new(MemorySessionStore::new());
    let mut shell = Shell::mount(store.clone(), fast_config()).await;
    assert_eq!(shell.state().phase(), ShellPhase::Unauthenticated);

    shell.login(asha()).await.unwrap();
    assert_eq!(shell.state().phase(), ShellPhase::Authenticated);
    assert_eq!(shell.state().session(), Some(&asha()));
    assert_eq!(shell.state().router().active(), ViewSelector::Dashboard);

    // The submitted record was persisted exactly.
    assert_eq!(store.load().await.unwrap(), Some(asha()));

    shell.shutdown().await;
}

#[tokio::test]
async fn prepopulated_store_skips_login() {
    let store = Arc::new(MemorySessionStore::with_session(asha()));
    let shell = Shell::mount(store, fast_config()).await;
    assert_eq!(shell.state().phase(), ShellPhase::Authenticated);
    assert_eq!(shell.state().session().unwrap().name, "Asha");
    shell.shutdown().await;
}

#[tokio::test]
async fn splash_runs_its_full_duration_even_with_instant_load() {
    let config = ShellConfig {
        splash_duration: Duration::from_millis(120),
        tick_interval: Duration::from_millis(5),
    };
    let store = Arc::new(MemorySessionStore::with_session(asha()));

    let started = Instant::now();
    let shell = Shell::mount(store, config).await;
    assert!(started.elapsed() >= Duration::from_millis(120));
    shell.shutdown().await;
}

#[tokio::test]
async fn logout_clears_store_and_resets_view() {
    let store = Arc::new(MemorySessionStore::with_session(asha()));
    let mut shell = Shell::mount(store.clone(), fast_config()).await;

    shell.navigate(ViewSelector::Marketplace);
    shell.toggle_sidebar();
    shell.logout().await.unwrap();

    assert_eq!(shell.state().phase(), ShellPhase::Unauthenticated);
    assert!(shell.state().session().is_none());
    assert_eq!(shell.state().router().active(), ViewSelector::Dashboard);
    assert!(!shell.state().router().is_sidebar_open());
    assert_eq!(store.load().await.unwrap(), None);

    shell.shutdown().await;
}

#[tokio::test]
async fn navigation_selects_each_view_and_closes_sidebar() {
    use strum::IntoEnumIterator;

    let store = Arc::new(MemorySessionStore::with_session(asha()));
    let mut shell = Shell::mount(store, fast_config()).await;

    for view in ViewSelector::iter() {
        shell.toggle_sidebar();
        shell.navigate(view);
        assert_eq!(shell.state().router().active(), view);
        assert!(!shell.state().router().is_sidebar_open());
    }

    shell.shutdown().await;
}

#[tokio::test]
async fn telemetry_ticks_stay_bounded_and_stop_on_teardown() {
    let store = Arc::new(MemorySessionStore::new());
    let start = TelemetrySnapshot {
        soil_humidity: 99.5,
        external_humidity: 0.5,
        ..TelemetrySnapshot::default()
    };
    let shell = Shell::mount_with_simulator(
        store,
        fast_config(),
        TelemetrySimulator::with_snapshot(start, 42),
    )
    .await;

    let mut rx = shell.subscribe_telemetry();
    for _ in 0..20 {
        rx.changed().await.unwrap();
        let snapshot = *rx.borrow();
        assert!((0.0..=100.0).contains(&snapshot.soil_humidity));
        assert!((0.0..=100.0).contains(&snapshot.external_humidity));
    }

    shell.shutdown().await;
    // Sender is gone after teardown: once anything in flight is marked
    // seen, no further snapshots can arrive.
    rx.borrow_and_update();
    assert!(rx.changed().await.is_err());
}

#[tokio::test]
async fn telemetry_runs_before_authentication() {
    let store = Arc::new(MemorySessionStore::new());
    let shell = Shell::mount(store, fast_config()).await;
    assert_eq!(shell.state().phase(), ShellPhase::Unauthenticated);

    let mut rx = shell.subscribe_telemetry();
    rx.changed().await.unwrap();

    shell.shutdown().await;
}
