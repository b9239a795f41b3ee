//! Row types for the dashboard's source tables
//!
//! Each struct maps one CSV extract row by header name:
//! - `OrderItem`: order/product/payment join row, source of both aggregates
//! - `CustomerLocation`: per-state customer count with a representative coordinate
//! - `CityOrderCount`: pre-aggregated order count per city
//! - `StateCategoryCount`: pre-aggregated product count per state and category
//!
//! Derived aggregate rows (`CategoryCount`, `PaymentCount`) live here too so the
//! renderers and the JSON API share one definition.

use serde::{Deserialize, Serialize};

/// Label shown for a customer location whose state code is not in the lookup table
pub const UNKNOWN_STATE: &str = "Unknown";

/// One row of the order-item join table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub order_id: String,
    pub product_id: String,
    /// Empty in the raw extract for uncategorized products
    #[serde(rename = "product_category_name_english", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
}

impl OrderItem {
    pub fn new(
        order_id: impl Into<String>,
        product_id: impl Into<String>,
        category: impl Into<String>,
        payment_type: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            product_id: product_id.into(),
            category: Some(category.into()),
            payment_type: Some(payment_type.into()),
        }
    }
}

/// Customer count for one state, positioned at a sample coordinate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerLocation {
    /// Two-letter state code (e.g. "SP")
    pub customer_state: String,
    #[serde(rename = "geolocation_lat")]
    pub lat: f64,
    #[serde(rename = "geolocation_lng")]
    pub lng: f64,
    /// Distinct customers; the extract keeps the source column name
    #[serde(rename = "customer_id")]
    pub customers: u64,
    /// Filled by the state lookup after load
    #[serde(skip_deserializing, default)]
    pub state_name: Option<String>,
}

impl CustomerLocation {
    pub fn new(state: impl Into<String>, lat: f64, lng: f64, customers: u64) -> Self {
        Self {
            customer_state: state.into(),
            lat,
            lng,
            customers,
            state_name: None,
        }
    }

    /// State name for display, `"Unknown"` when the code was not mapped
    pub fn display_state(&self) -> &str {
        self.state_name.as_deref().unwrap_or(UNKNOWN_STATE)
    }
}

/// Orders placed from one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityOrderCount {
    #[serde(rename = "customer_city")]
    pub city: String,
    #[serde(rename = "order_id")]
    pub orders: u64,
}

impl CityOrderCount {
    pub fn new(city: impl Into<String>, orders: u64) -> Self {
        Self {
            city: city.into(),
            orders,
        }
    }
}

/// Products sold in one category within one state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateCategoryCount {
    pub state_name: String,
    #[serde(rename = "product_category_name_english")]
    pub category: String,
    #[serde(rename = "product_id")]
    pub products: u64,
}

impl StateCategoryCount {
    pub fn new(state: impl Into<String>, category: impl Into<String>, products: u64) -> Self {
        Self {
            state_name: state.into(),
            category: category.into(),
            products,
        }
    }
}

/// Distinct products per category (derived)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub products: u64,
}

/// Distinct orders per payment type (derived)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentCount {
    pub payment_type: String,
    pub orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_state_falls_back_to_unknown() {
        let mut location = CustomerLocation::new("XX", -10.0, -50.0, 3);
        assert_eq!(location.display_state(), "Unknown");

        location.state_name = Some("Bahia".to_string());
        assert_eq!(location.display_state(), "Bahia");
    }

    #[test]
    fn test_order_item_deserializes_empty_category_as_none() {
        let csv_data = "order_id,product_id,product_category_name_english,payment_type
o1,p1,,credit_card";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let item: OrderItem = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(item.category, None);
        assert_eq!(item.payment_type.as_deref(), Some("credit_card"));
    }
}
