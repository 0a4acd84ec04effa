//! Session store abstraction.
//!
//! The store owns a single durable slot holding the current session.
//! Different implementations back it with a file, memory, etc.

use super::model::Session;
use crate::error::Result;

/// Durable single-slot storage for the current session.
///
/// # Contract
///
/// - `load` returns `Ok(None)` for an absent slot. A malformed record is
///   treated the same way: implementations must clear the slot and
///   return `Ok(None)` rather than propagate the parse failure.
/// - `save` overwrites any prior value.
/// - `clear` removes the slot and is idempotent.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the slot. Absent or corrupt content yields `Ok(None)`.
    async fn load(&self) -> Result<Option<Session>>;

    /// Serializes and writes the slot, overwriting any prior value.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Removes the slot.
    async fn clear(&self) -> Result<()>;
}
