//! Seeded produce catalog.
//!
//! Stands in for a marketplace backend: listings are fixed sample data,
//! the same on every start.

use super::model::{MarketCategory, MarketItem};

/// Returns the built-in marketplace listings.
pub fn seeded_catalog() -> Vec<MarketItem> {
    vec![
        MarketItem {
            id: "mk-01".to_string(),
            name: "Desi Tomatoes".to_string(),
            farmer_name: "Ramesh Patel".to_string(),
            price: 28.0,
            unit: "kg".to_string(),
            category: MarketCategory::Vegetables,
            description: "Vine-ripened, pesticide free".to_string(),
            location: "Nashik, Maharashtra".to_string(),
            is_verified: true,
        },
        MarketItem {
            id: "mk-02".to_string(),
            name: "Alphonso Mangoes".to_string(),
            farmer_name: "Sunita Desai".to_string(),
            price: 450.0,
            unit: "dozen".to_string(),
            category: MarketCategory::Fruits,
            description: "Ratnagiri orchard, export grade".to_string(),
            location: "Ratnagiri, Maharashtra".to_string(),
            is_verified: true,
        },
        MarketItem {
            id: "mk-03".to_string(),
            name: "Basmati Rice".to_string(),
            farmer_name: "Harpreet Singh".to_string(),
            price: 95.0,
            unit: "kg".to_string(),
            category: MarketCategory::Grains,
            description: "Aged 12 months, long grain".to_string(),
            location: "Amritsar, Punjab".to_string(),
            is_verified: false,
        },
        MarketItem {
            id: "mk-04".to_string(),
            name: "Kufri Potatoes".to_string(),
            farmer_name: "Meena Kumari".to_string(),
            price: 18.0,
            unit: "kg".to_string(),
            category: MarketCategory::Tubers,
            description: "Cold-stored, uniform size".to_string(),
            location: "Agra, Uttar Pradesh".to_string(),
            is_verified: true,
        },
        MarketItem {
            id: "mk-05".to_string(),
            name: "Nati Onions".to_string(),
            farmer_name: "Basavaraj Gowda".to_string(),
            price: 22.0,
            unit: "kg".to_string(),
            category: MarketCategory::Vegetables,
            description: "Small red onions, strong flavour".to_string(),
            location: "Chitradurga, Karnataka".to_string(),
            is_verified: false,
        },
        MarketItem {
            id: "mk-06".to_string(),
            name: "Raw Forest Honey".to_string(),
            farmer_name: "Lalita Oraon".to_string(),
            price: 320.0,
            unit: "500 g jar".to_string(),
            category: MarketCategory::Other,
            description: "Wild harvested, unfiltered".to_string(),
            location: "Ranchi, Jharkhand".to_string(),
            is_verified: true,
        },
    ]
}
