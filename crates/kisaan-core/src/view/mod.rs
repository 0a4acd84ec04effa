//! View routing: the closed set of navigable panels and the chrome flag.

pub mod router;
pub mod selector;

pub use router::ViewRouter;
pub use selector::ViewSelector;
