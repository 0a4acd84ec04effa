//! Marketplace panel.

use colored::Colorize;
use kisaan_core::marketplace::MarketItem;

/// Renders the produce listings.
pub fn render(catalog: &[MarketItem]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Marketplace".bright_green().bold()));

    for item in catalog {
        let verified = if item.is_verified {
            " [verified]".green().to_string()
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {}  Rs {:.0}/{}  ({})\n",
            item.name.bold(),
            item.price,
            item.unit,
            item.category
        ));
        out.push_str(&format!(
            "    {} - {}{}\n",
            item.farmer_name, item.location, verified
        ));
        out.push_str(&format!("    {}\n", item.description.dimmed()));
    }
    out
}
