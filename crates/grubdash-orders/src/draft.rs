//! Request payload types.
//!
//! Every field is optional: presence and range are decided by the guards,
//! never by the decoder. `dishes`, `price` and `quantity` stay as raw JSON
//! values so that "not an array" or "not an integer" surfaces as the
//! matching guard message instead of a decode failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::OrderError;

/// `{ "data": { ... } }` envelope of POST/PUT bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<OrderDraft>,
}

impl OrderRequest {
    pub fn new(draft: OrderDraft) -> Self {
        Self { data: Some(draft) }
    }

    /// Decode a raw request body. An empty (or whitespace-only) body is an
    /// empty request, so it reaches the guards like `{}` does.
    pub fn from_body(body: &[u8]) -> Result<Self, OrderError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| OrderError::MalformedBody(e.to_string()))
    }

    /// A missing `data` object behaves as an empty one.
    pub fn into_draft(self) -> OrderDraft {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliver_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dishes: Option<Value>,
}

impl OrderDraft {
    /// Value of a required text field; empty strings count as absent.
    pub fn field(&self, field: OrderField) -> Option<&str> {
        let raw = match field {
            OrderField::DeliverTo => self.deliver_to.as_deref(),
            OrderField::MobileNumber => self.mobile_number.as_deref(),
            OrderField::Status => self.status.as_deref(),
        };
        raw.filter(|s| !s.is_empty())
    }

    /// Body identifier, if one was supplied.
    pub fn body_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Required text fields of an order payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    DeliverTo,
    MobileNumber,
    Status,
}

impl OrderField {
    /// Name as it appears in the JSON payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::DeliverTo => "deliverTo",
            OrderField::MobileNumber => "mobileNumber",
            OrderField::Status => "status",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the `dishes` array as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

/// A dish that passed validation; price and quantity are known to be > 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishLine {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: u64,
    pub quantity: u64,
}

/// Interpret a JSON value as an integer greater than zero.
///
/// Integral floats (`2.0`) are accepted; fractions, strings, booleans and
/// non-positive numbers are not. `u64::MAX as f64` rounds up to 2^64, so the
/// float bound is exclusive.
pub fn positive_integer(v: Option<&Value>) -> Option<u64> {
    let Some(Value::Number(n)) = v else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f >= 1.0 && f < u64::MAX as f64).then_some(f as u64)
}
