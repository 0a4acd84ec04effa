//! Marketplace domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Produce category used for marketplace filtering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarketCategory {
    Vegetables,
    Fruits,
    Grains,
    Tubers,
    Other,
}

/// A single produce listing in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    /// Listing identifier
    pub id: String,
    /// Produce name
    pub name: String,
    /// Name of the selling farmer
    pub farmer_name: String,
    /// Price in rupees per unit
    pub price: f64,
    /// Selling unit ("kg", "dozen", ...)
    pub unit: String,
    /// Produce category
    pub category: MarketCategory,
    /// Short listing description
    pub description: String,
    /// Farm location (district, state)
    pub location: String,
    /// Whether the seller identity has been verified
    pub is_verified: bool,
}

/// Filters listings down to a single category, preserving order.
pub fn by_category(items: &[MarketItem], category: MarketCategory) -> Vec<&MarketItem> {
    items
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::seeded_catalog;

    #[test]
    fn test_by_category_only_returns_matches() {
        let catalog = seeded_catalog();
        let fruits = by_category(&catalog, MarketCategory::Fruits);
        assert!(!fruits.is_empty());
        assert!(fruits
            .iter()
            .all(|item| item.category == MarketCategory::Fruits));
    }

    #[test]
    fn test_category_parses_from_lowercase() {
        use std::str::FromStr;
        assert_eq!(
            MarketCategory::from_str("tubers").unwrap(),
            MarketCategory::Tubers
        );
    }
}
