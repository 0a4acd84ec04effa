pub mod dto;
pub mod memory_session_store;
pub mod paths;
pub mod toml_session_store;

pub use crate::memory_session_store::MemorySessionStore;
pub use crate::paths::KisaanPaths;
pub use crate::toml_session_store::TomlSessionStore;
