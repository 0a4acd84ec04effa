//! Marketplace listings: local produce offered by nearby farms.

pub mod catalog;
pub mod model;

pub use catalog::seeded_catalog;
pub use model::{by_category, MarketCategory, MarketItem};
