//! Wire types for the orders resource.
//!
//! Field names follow the public JSON contract (`deliverTo`, `mobileNumber`,
//! `image_url`), so these types are what the daemon encodes and what stored
//! seed files decode into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an order.
///
/// `Delivered` is terminal: a delivered order can no longer be updated.
/// Only `Pending` orders may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the four status values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Dish / Order
// ---------------------------------------------------------------------------

/// A line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Always > 0 once persisted.
    pub price: u64,
    /// Always > 0 once persisted.
    pub quantity: u64,
}

/// A customer's food order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<Dish>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out-for-delivery\"");
        assert_eq!(
            "out-for-delivery".parse::<OrderStatus>().unwrap(),
            OrderStatus::OutForDelivery
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("shipped".to_string()));
    }

    #[test]
    fn order_serializes_with_camel_case_fields_and_snake_image_url() {
        let order = Order {
            id: "o1".to_string(),
            deliver_to: "308 Negra Arroyo Lane".to_string(),
            mobile_number: "(505) 143-3369".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![Dish {
                id: "d1".to_string(),
                name: Some("Taco".to_string()),
                description: None,
                image_url: Some("https://example.test/taco.png".to_string()),
                price: 5,
                quantity: 2,
            }],
        };

        let v = serde_json::to_value(&order).unwrap();
        assert_eq!(v["deliverTo"], "308 Negra Arroyo Lane");
        assert_eq!(v["mobileNumber"], "(505) 143-3369");
        assert_eq!(v["status"], "pending");
        assert_eq!(v["dishes"][0]["image_url"], "https://example.test/taco.png");
        assert!(v["dishes"][0].get("description").is_none());
    }
}
