//! Sensor-data dashboard panel.

use colored::Colorize;
use kisaan_core::session::Session;
use kisaan_core::telemetry::TelemetrySnapshot;

fn humidity_note(percent: f64) -> &'static str {
    if percent < 30.0 {
        "dry"
    } else if percent <= 70.0 {
        "optimal"
    } else {
        "saturated"
    }
}

/// Renders the live readings for the signed-in farm.
pub fn render(snapshot: &TelemetrySnapshot, session: &Session) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("Field readings - {}", session.farm_name)
            .bright_green()
            .bold()
    ));
    out.push_str(&format!(
        "  Soil humidity     {:>6.1} %  ({})\n",
        snapshot.soil_humidity,
        humidity_note(snapshot.soil_humidity)
    ));
    out.push_str(&format!(
        "  Temperature       {:>6.1} \u{b0}C\n",
        snapshot.temperature
    ));
    out.push_str(&format!(
        "  Air humidity      {:>6.1} %  ({})\n",
        snapshot.external_humidity,
        humidity_note(snapshot.external_humidity)
    ));
    out.push_str(&format!("  Soil pH           {:>6.1}\n", snapshot.soil_ph));
    out.push_str(&format!(
        "  N / P / K         {:.0} / {:.0} / {:.0} kg/ha\n",
        snapshot.nitrogen, snapshot.phosphorus, snapshot.potassium
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_farm_and_readings() {
        let session = Session::new("Asha", "a@x.com", "Green Acres");
        let rendered = render(&TelemetrySnapshot::default(), &session);
        assert!(rendered.contains("Green Acres"));
        assert!(rendered.contains("42.0"));
        assert!(rendered.contains("optimal"));
    }
}
