//! TOML-backed session store.
//!
//! Persists the current session as a single TOML file under the Kisaan
//! config directory. A corrupt record is the one anticipated fault: it
//! is logged, the slot is cleared, and the caller sees "no session".

use std::fs;

use kisaan_core::error::{KisaanError, Result};
use kisaan_core::session::{Session, SessionStore};

use crate::dto::SessionRecordV1;
use crate::paths::KisaanPaths;

/// File-backed implementation of [`SessionStore`].
///
/// # Example
///
/// ```ignore
/// use kisaan_infrastructure::TomlSessionStore;
///
/// let store = TomlSessionStore::new();
/// let session = store.load().await?;
/// ```
pub struct TomlSessionStore {
    paths: KisaanPaths,
}

impl TomlSessionStore {
    /// Store rooted at the platform config directory.
    pub fn new() -> Self {
        Self {
            paths: KisaanPaths::new(None),
        }
    }

    /// Store rooted at an explicit directory (tests).
    pub fn with_root(root: std::path::PathBuf) -> Self {
        Self {
            paths: KisaanPaths::new(Some(root)),
        }
    }
}

impl Default for TomlSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionStore for TomlSessionStore {
    async fn load(&self) -> Result<Option<Session>> {
        let path = self.paths.session_file()?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| KisaanError::io(format!("Failed to read {:?}: {}", path, e)))?;

        match toml::from_str::<SessionRecordV1>(&content) {
            Ok(record) => Ok(Some(record.into())),
            Err(e) => {
                // Corrupt slot: recover silently, never propagate the parse failure.
                tracing::warn!("[SessionStore] Corrupt session record, clearing slot: {}", e);
                let _ = fs::remove_file(&path);
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let dir = self.paths.config_dir()?;
        fs::create_dir_all(&dir)
            .map_err(|e| KisaanError::io(format!("Failed to create {:?}: {}", dir, e)))?;

        let record = SessionRecordV1::from(session);
        let content = toml::to_string_pretty(&record)
            .map_err(|e| KisaanError::serialization("TOML", e.to_string()))?;

        let path = self.paths.session_file()?;
        fs::write(&path, content)
            .map_err(|e| KisaanError::io(format!("Failed to write {:?}: {}", path, e)))?;

        tracing::debug!("[SessionStore] Saved session {}", session.id);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let path = self.paths.session_file()?;
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| KisaanError::io(format!("Failed to remove {:?}: {}", path, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TomlSessionStore {
        TomlSessionStore::with_root(dir.path().to_path_buf())
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
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&asha()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(asha()));
    }

    #[tokio::test]
    async fn test_load_absent_slot_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_slot_is_cleared_and_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let path = dir.path().join("session.toml");
        fs::write(&path, "not = [valid").unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, None);
        assert!(!path.exists(), "corrupt slot should be removed");
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&asha()).await.unwrap();
        let other = Session {
            id: "u2".to_string(),
            name: "Ravi".to_string(),
            email: "r@x.com".to_string(),
            farm_name: "Sunrise Fields".to_string(),
        };
        store.save(&other).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(other));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&asha()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
