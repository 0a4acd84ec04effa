//! Unified path management for Kisaan configuration files.
//!
//! All durable state lives under the platform config directory
//! (`~/.config/kisaan/` on Linux). Tests point the root at a tempdir.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for kisaan_core::KisaanError {
    fn from(err: PathError) -> Self {
        kisaan_core::KisaanError::storage(err.to_string())
    }
}

/// Unified path management for Kisaan.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/kisaan/            # Config directory
/// └── session.toml             # Durable session slot
/// ```
pub struct KisaanPaths {
    /// Overrides the config directory entirely when set (tests).
    root: Option<PathBuf>,
}

impl KisaanPaths {
    /// Creates a path resolver. Pass `None` to use the platform config
    /// directory, or `Some(root)` to pin everything under `root`.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Returns the Kisaan configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/kisaan/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("kisaan"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the durable session slot.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_root_wins() {
        let paths = KisaanPaths::new(Some(PathBuf::from("/tmp/kisaan-test")));
        assert_eq!(
            paths.session_file().unwrap(),
            PathBuf::from("/tmp/kisaan-test/session.toml")
        );
    }

    #[test]
    fn test_platform_config_dir_ends_with_kisaan() {
        let paths = KisaanPaths::new(None);
        if let Ok(dir) = paths.config_dir() {
            assert!(dir.ends_with("kisaan"));
        }
    }
}
