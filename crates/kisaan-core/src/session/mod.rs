//! Session domain: the authenticated actor's identity and its store.

pub mod model;
pub mod store;

pub use model::Session;
pub use store::SessionStore;
