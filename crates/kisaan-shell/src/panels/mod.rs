//! Panel rendering.
//!
//! Each panel renders to a `String` so the REPL can print it and tests
//! can assert on it. Dispatch over the view selector is exhaustive:
//! adding a panel without wiring it here fails to compile.

pub mod analyzer;
pub mod dashboard;
pub mod marketplace;
pub mod settings;

use kisaan_core::analyzer::SavedAnalysis;
use kisaan_core::marketplace::MarketItem;
use kisaan_core::session::Session;
use kisaan_core::telemetry::TelemetrySnapshot;
use kisaan_core::view::ViewSelector;

/// Renders whichever panel the selector designates.
pub fn render_panel(
    view: ViewSelector,
    snapshot: &TelemetrySnapshot,
    session: &Session,
    analyses: &[SavedAnalysis],
    catalog: &[MarketItem],
) -> String {
    match view {
        ViewSelector::Dashboard => dashboard::render(snapshot, session),
        ViewSelector::Analyzer => analyzer::render(analyses),
        ViewSelector::Marketplace => marketplace::render(catalog),
        ViewSelector::Settings => settings::render(session),
    }
}
