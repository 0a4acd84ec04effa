//! Pure shell state transitions.
//!
//! Every transition consumes the old state and returns a new snapshot.
//! The runtime layer re-derives its views (active panel, chrome) from
//! the returned state after each transition; nothing reacts implicitly.

use serde::{Deserialize, Serialize};

use super::phase::ShellPhase;
use crate::session::Session;
use crate::view::{ViewRouter, ViewSelector};

/// The complete in-memory state the shell owns: lifecycle phase, the
/// transient copy of the stored session, and the view router.
///
/// Transitions that do not apply in the current phase return the state
/// unchanged; the enumeration of phases makes illegal jumps (for
/// example login while still in splash) unrepresentable as effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellState {
    phase: ShellPhase,
    session: Option<Session>,
    router: ViewRouter,
}

impl ShellState {
    /// Initial state: splash phase, no session, dashboard selected.
    pub fn new() -> Self {
        Self {
            phase: ShellPhase::Splash,
            session: None,
            router: ViewRouter::new(),
        }
    }

    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn router(&self) -> ViewRouter {
        self.router
    }

    /// Ends the splash phase with the result of the opportunistic
    /// session load: straight to Authenticated when a valid session was
    /// found, otherwise to Unauthenticated.
    pub fn splash_finished(self, loaded: Option<Session>) -> Self {
        if self.phase != ShellPhase::Splash {
            return self;
        }
        match loaded {
            Some(session) => Self {
                phase: ShellPhase::Authenticated,
                session: Some(session),
                router: ViewRouter::new(),
            },
            None => Self {
                phase: ShellPhase::Unauthenticated,
                ..self
            },
        }
    }

    /// Adopts a freshly authenticated session. Only meaningful while
    /// the login screen is showing.
    pub fn login(self, session: Session) -> Self {
        if self.phase != ShellPhase::Unauthenticated {
            return self;
        }
        Self {
            phase: ShellPhase::Authenticated,
            session: Some(session),
            router: ViewRouter::new(),
        }
    }

    /// Discards the session and resets the router to the dashboard.
    pub fn logout(self) -> Self {
        if self.phase != ShellPhase::Authenticated {
            return self;
        }
        Self {
            phase: ShellPhase::Unauthenticated,
            session: None,
            router: ViewRouter::new(),
        }
    }

    /// Selects a panel. A no-op outside the authenticated phase.
    pub fn navigate(self, view: ViewSelector) -> Self {
        if self.phase != ShellPhase::Authenticated {
            return self;
        }
        Self {
            router: self.router.navigate(view),
            ..self
        }
    }

    /// Flips the side-panel flag. A no-op outside the authenticated phase.
    pub fn toggle_sidebar(self) -> Self {
        if self.phase != ShellPhase::Authenticated {
            return self;
        }
        Self {
            router: self.router.toggle_sidebar(),
            ..self
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> Session {
        Session {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            farm_name: "Green Acres".to_string(),
        }
    }

    #[test]
    fn test_splash_without_session_enters_unauthenticated() {
        let state = ShellState::new().splash_finished(None);
        assert_eq!(state.phase(), ShellPhase::Unauthenticated);
        assert!(state.session().is_none());
    }

    #[test]
    fn test_splash_with_session_skips_login() {
        let state = ShellState::new().splash_finished(Some(asha()));
        assert_eq!(state.phase(), ShellPhase::Authenticated);
        assert_eq!(state.session().unwrap().name, "Asha");
        assert_eq!(state.router().active(), ViewSelector::Dashboard);
    }

    #[test]
    fn test_login_transitions_to_authenticated() {
        let state = ShellState::new().splash_finished(None).login(asha());
        assert_eq!(state.phase(), ShellPhase::Authenticated);
        assert_eq!(state.session(), Some(&asha()));
    }

    #[test]
    fn test_login_is_ignored_during_splash() {
        let state = ShellState::new().login(asha());
        assert_eq!(state.phase(), ShellPhase::Splash);
        assert!(state.session().is_none());
    }

    #[test]
    fn test_logout_resets_view_and_session() {
        let state = ShellState::new()
            .splash_finished(Some(asha()))
            .navigate(ViewSelector::Marketplace)
            .toggle_sidebar()
            .logout();
        assert_eq!(state.phase(), ShellPhase::Unauthenticated);
        assert!(state.session().is_none());
        assert_eq!(state.router().active(), ViewSelector::Dashboard);
        assert!(!state.router().is_sidebar_open());
    }

    #[test]
    fn test_navigate_requires_authentication() {
        let state = ShellState::new()
            .splash_finished(None)
            .navigate(ViewSelector::Settings);
        assert_eq!(state.router().active(), ViewSelector::Dashboard);
    }

    #[test]
    fn test_navigate_closes_sidebar() {
        let state = ShellState::new()
            .splash_finished(Some(asha()))
            .toggle_sidebar()
            .navigate(ViewSelector::Analyzer);
        assert_eq!(state.router().active(), ViewSelector::Analyzer);
        assert!(!state.router().is_sidebar_open());
    }

    #[test]
    fn test_splash_finished_fires_once() {
        let state = ShellState::new()
            .splash_finished(None)
            .splash_finished(Some(asha()));
        // A second splash completion must not re-authenticate.
        assert_eq!(state.phase(), ShellPhase::Unauthenticated);
        assert!(state.session().is_none());
    }
}
