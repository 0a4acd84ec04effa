//! Session domain model.
//!
//! This module contains the Session entity that represents the
//! authenticated farmer in the application's domain layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the authenticated farmer's identity.
///
/// A session is created on successful login, stays immutable while the
/// user is signed in, and is discarded on logout (or when the stored
/// record turns out to be corrupt).
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Farmer's display name
    pub name: String,
    /// Farmer's email address
    pub email: String,
    /// Name of the farm this account manages
    pub farm_name: String,
}

impl Session {
    /// Creates a new session with a generated identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use kisaan_core::session::Session;
    ///
    /// let session = Session::new("Asha", "a@x.com", "Green Acres");
    /// assert_eq!(session.farm_name, "Green Acres");
    /// assert!(!session.id.is_empty());
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        farm_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            farm_name: farm_name.into(),
        }
    }
}
