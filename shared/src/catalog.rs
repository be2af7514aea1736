//! ==============================================================================
//! catalog.rs - menu items and the embedded catalog
//! ==============================================================================
//!
//! the catalog is built once at startup from a json document compiled into
//! the binary and is read-only afterwards. there is no create/update/delete.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hours::OperatingHours;

/// compiled-in menu: the six documented pizzas plus opening hours
const EMBEDDED_MENU: &str = include_str!("../data/menu.json");

// ==============================================================================
// types
// ==============================================================================

/// one pizza on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// display name, also used as the list key
    pub name: String,
    /// free text
    pub ingredients: String,
    /// price in the house currency (not validated)
    pub price: f64,
    /// path of the static photo asset (not validated)
    pub photo_name: String,
    pub sold_out: bool,
}

/// the whole menu plus when the restaurant is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub hours: OperatingHours,
    pub pizzas: Vec<MenuItem>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be between 0 and 23, got {value}")]
    HourOutOfRange { field: &'static str, value: u8 },
}

// ==============================================================================
// loading
// ==============================================================================

impl Catalog {
    /// parse a catalog document and check the hours are real hours
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.hours.check_range()?;

        log::debug!(
            "loaded catalog: {} pizzas, open {}..{}",
            catalog.pizzas.len(),
            catalog.hours.open_hour,
            catalog.hours.close_hour
        );
        Ok(catalog)
    }

    /// the menu compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_MENU)
    }

    /// names used by more than one pizza, in first-seen order.
    ///
    /// names double as list keys, so a duplicate makes keyed rendering
    /// ambiguous. this is reported, not rejected.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut dupes: Vec<&str> = Vec::new();
        for (i, pizza) in self.pizzas.iter().enumerate() {
            let name = pizza.name.as_str();
            let seen_before = self.pizzas[..i].iter().any(|p| p.name == name);
            if seen_before && !dupes.contains(&name) {
                dupes.push(name);
            }
        }
        dupes
    }
}

impl Default for Catalog {
    /// no pizzas yet, default opening hours
    fn default() -> Self {
        Self {
            hours: OperatingHours::default(),
            pizzas: Vec::new(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza(name: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "ingredients": "Tomato",
            "price": 9,
            "photo_name": "pizzas/x.jpg",
            "sold_out": false
        })
    }

    #[test]
    fn test_embedded_catalog_matches_documented_menu() {
        let catalog = Catalog::embedded().unwrap();
        let names: Vec<&str> = catalog.pizzas.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Focaccia",
                "Pizza Margherita",
                "Pizza Spinaci",
                "Pizza Funghi",
                "Pizza Salamino",
                "Pizza Prosciutto",
            ]
        );
        assert_eq!(catalog.hours, OperatingHours::new(10, 22));

        let sold_out: Vec<&str> = catalog
            .pizzas
            .iter()
            .filter(|p| p.sold_out)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(sold_out, vec!["Pizza Salamino"]);
        assert_eq!(catalog.pizzas[0].price, 6.0);
        assert_eq!(catalog.pizzas[5].photo_name, "pizzas/prosciutto.jpg");
    }

    #[test]
    fn test_embedded_catalog_has_unique_names() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.duplicate_names().is_empty());
    }

    #[test]
    fn test_duplicate_names_reported_once_in_order() {
        let doc = serde_json::json!({
            "hours": { "open_hour": 10, "close_hour": 22 },
            "pizzas": [pizza("B"), pizza("A"), pizza("B"), pizza("A"), pizza("B"), pizza("C")]
        });
        let catalog = Catalog::from_json(&doc.to_string()).unwrap();
        assert_eq!(catalog.duplicate_names(), vec!["B", "A"]);
    }

    #[test]
    fn test_empty_pizza_list_is_valid() {
        let doc = r#"{ "hours": { "open_hour": 8, "close_hour": 20 }, "pizzas": [] }"#;
        let catalog = Catalog::from_json(doc).unwrap();
        assert!(catalog.pizzas.is_empty());
        assert_eq!(catalog.hours.open_hour, 8);
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        let doc = r#"{ "hours": { "open_hour": 10, "close_hour": 24 }, "pizzas": [] }"#;
        let err = Catalog::from_json(doc).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::HourOutOfRange { field: "close_hour", value: 24 }
        ));
        assert_eq!(err.to_string(), "close_hour must be between 0 and 23, got 24");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{ \"pizzas\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_default_catalog_is_empty_with_house_hours() {
        let catalog = Catalog::default();
        assert!(catalog.pizzas.is_empty());
        assert_eq!(catalog.hours, OperatingHours::new(10, 22));
    }
}
