//! The closed enumeration of navigable panels.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Selects exactly one of the four panels.
///
/// Being a closed enumeration, no invalid selector value is
/// constructible; navigation among the panels is exhaustive and
/// mutually exclusive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewSelector {
    /// Sensor-data dashboard (default at session start)
    #[default]
    Dashboard,
    /// Image-based visual analyzer
    Analyzer,
    /// Marketplace listing
    Marketplace,
    /// Account settings
    Settings,
}

impl ViewSelector {
    /// Human-readable panel title for navigation menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analyzer => "Visual Analyzer",
            Self::Marketplace => "Marketplace",
            Self::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(ViewSelector::default(), ViewSelector::Dashboard);
    }

    #[test]
    fn test_parse_round_trips_every_variant() {
        for view in ViewSelector::iter() {
            let parsed = ViewSelector::from_str(&view.to_string()).unwrap();
            assert_eq!(parsed, view);
        }
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        assert!(ViewSelector::from_str("reports").is_err());
    }
}
