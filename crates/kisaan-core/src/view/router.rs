//! View router.
//!
//! Owns the active panel selector and the collapsible side-panel flag
//! used under narrow-viewport layouts. Transitions return new value
//! snapshots; nothing here mutates in place.

use serde::{Deserialize, Serialize};

use super::selector::ViewSelector;

/// Maps the view selector to exactly one visible panel and tracks the
/// navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewRouter {
    active: ViewSelector,
    sidebar_open: bool,
}

impl ViewRouter {
    /// Router at session start: dashboard visible, sidebar closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible panel.
    pub fn active(&self) -> ViewSelector {
        self.active
    }

    /// Whether the narrow-viewport side panel is open.
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Selects a panel. The sidebar is force-closed on every navigation,
    /// whatever its prior state.
    pub fn navigate(self, view: ViewSelector) -> Self {
        Self {
            active: view,
            sidebar_open: false,
        }
    }

    /// Flips the side-panel visibility flag.
    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }
}
