//! Menu catalog loading from menu.toml
//!
//! The menu is static, read-only reference data: the core reads item ids,
//! names, prices, and categories from it when building cart lines, but never
//! mutates it. Items defined in menu.toml are grouped into a fixed, closed
//! set of categories. The module also carries the day-of-week promotional
//! lookup shown on the storefront.

use crate::errors::{Error, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Closed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Veg,
    NonVeg,
    Snacks,
    Juice,
    Fruits,
}

impl Category {
    /// Stable lowercase name, matching the serialized form and the category
    /// snapshots stored on cart and order lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
            Self::Snacks => "snacks",
            Self::Juice => "juice",
            Self::Fruits => "fruits",
        }
    }
}

/// Configuration structure representing the entire menu.toml file
#[derive(Debug, Deserialize)]
pub struct MenuConfig {
    /// List of purchasable items
    pub items: Vec<MenuItem>,
}

/// A single purchasable catalog item
#[derive(Debug, Deserialize, Clone)]
pub struct MenuItem {
    /// Stable item identifier (e.g., `"veg-001"`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price in whole currency units, always positive
    pub price: i64,
    /// Category the item is listed under
    pub category: Category,
    /// Short description shown on the menu
    pub description: String,
    /// Image asset reference
    pub image: String,
    /// Whether the item can currently be ordered
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

impl MenuConfig {
    /// Looks up an item by its identifier.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the available items listed under a category.
    pub fn items_in_category(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category && item.available)
    }
}

/// A day-of-week promotion shown on the storefront. Purely informational;
/// the checkout math does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOffer {
    /// Offer headline (e.g., `"Combo Monday"`)
    pub title: &'static str,
    /// What the offer covers
    pub description: &'static str,
    /// Discount tag shown on the banner
    pub discount: &'static str,
}

/// Returns the promotional offer for the given day of the week.
#[must_use]
pub const fn day_offer(day: Weekday) -> DayOffer {
    match day {
        Weekday::Mon => DayOffer {
            title: "Combo Monday",
            description: "Get any main course + juice combo",
            discount: "15% OFF",
        },
        Weekday::Tue => DayOffer {
            title: "Coupon Tuesday",
            description: "Extra 20 points on every order",
            discount: "Double Points",
        },
        Weekday::Wed => DayOffer {
            title: "Mid-Week Special",
            description: "Free samosa with any meal",
            discount: "Free Snack",
        },
        Weekday::Thu => DayOffer {
            title: "Thirsty Thursday",
            description: "Buy 1 Get 1 on all beverages",
            discount: "BOGO",
        },
        Weekday::Fri => DayOffer {
            title: "Friday Feast",
            description: "Flat 50 off on orders above 200",
            discount: "50 OFF",
        },
        Weekday::Sat => DayOffer {
            title: "Weekend Special",
            description: "Special biriyani varieties available",
            discount: "10% OFF",
        },
        Weekday::Sun => DayOffer {
            title: "Sunday Brunch",
            description: "Breakfast items at discounted rates",
            discount: "20% OFF",
        },
    }
}

/// Loads the menu catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MenuConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read menu file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse menu.toml: {e}"),
    })
}

/// Loads the menu catalog from the default location (./menu.toml)
pub fn load_default_config() -> Result<MenuConfig> {
    load_config("menu.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_menu_config() {
        let toml_str = r#"
            [[items]]
            id = "veg-001"
            name = "Idly Set"
            price = 40
            category = "veg"
            description = "4 Soft idlis with sambar and chutney"
            image = "assets/idly.jpg"

            [[items]]
            id = "non-veg-001"
            name = "Chicken Biriyani"
            price = 190
            category = "non-veg"
            description = "Aromatic rice with tender chicken pieces"
            image = "assets/biriyani.jpg"
            available = false
        "#;

        let config: MenuConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[0].id, "veg-001");
        assert_eq!(config.items[0].price, 40);
        assert_eq!(config.items[0].category, Category::Veg);
        assert!(config.items[0].available); // defaults to true

        assert_eq!(config.items[1].category, Category::NonVeg);
        assert!(!config.items[1].available);
    }

    #[test]
    fn test_find_item() {
        let config = MenuConfig {
            items: vec![MenuItem {
                id: "snack-001".to_string(),
                name: "Samosa".to_string(),
                price: 20,
                category: Category::Snacks,
                description: "Crispy triangular pastry with filling".to_string(),
                image: "assets/samosa.jpg".to_string(),
                available: true,
            }],
        };

        assert!(config.find_item("snack-001").is_some());
        assert!(config.find_item("snack-999").is_none());
    }

    #[test]
    fn test_items_in_category_skips_unavailable() {
        let item = MenuItem {
            id: "juice-001".to_string(),
            name: "Orange Juice".to_string(),
            price: 60,
            category: Category::Juice,
            description: "Freshly squeezed orange juice".to_string(),
            image: "assets/orange-juice.jpg".to_string(),
            available: true,
        };
        let mut sold_out = item.clone();
        sold_out.id = "juice-002".to_string();
        sold_out.available = false;

        let config = MenuConfig {
            items: vec![item, sold_out],
        };

        let listed: Vec<_> = config.items_in_category(Category::Juice).collect();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "juice-001");
    }

    #[test]
    fn test_day_offer_covers_every_day() {
        assert_eq!(day_offer(Weekday::Mon).title, "Combo Monday");
        assert_eq!(day_offer(Weekday::Thu).discount, "BOGO");
        assert_eq!(day_offer(Weekday::Sun).title, "Sunday Brunch");
    }
}
