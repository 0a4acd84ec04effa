//! In-memory session store.
//!
//! Backs the shell in tests and demos where touching the real config
//! directory is unwanted.

use kisaan_core::error::Result;
use kisaan_core::session::{Session, SessionStore};
use tokio::sync::Mutex;

/// [`SessionStore`] holding the slot in process memory.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates a store with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        *self.slot.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
