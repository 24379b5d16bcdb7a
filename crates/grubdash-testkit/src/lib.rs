//! Shared fixtures for GrubDash tests.
//!
//! - `SequentialIds`: deterministic identifiers ("id-1", "id-2", ...)
//! - `sample_orders`: one order per status, with stable ids
//! - request builders producing `{ "data": ... }` JSON bodies

use std::sync::atomic::{AtomicU64, Ordering};

use grubdash_orders::{MemoryOrderStore, OrderDraft, OrderService};
use grubdash_schemas::{Dish, Order, OrderStatus};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Deterministic id source for assertions on generated identifiers.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl grubdash_orders::IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{n}")
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

pub const PENDING_ID: &str = "order-pending";
pub const PREPARING_ID: &str = "order-preparing";
pub const OUT_FOR_DELIVERY_ID: &str = "order-out-for-delivery";
pub const DELIVERED_ID: &str = "order-delivered";

pub fn sample_dish(id: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: Some("Dolcelatte and chickpea spaghetti".to_string()),
        description: Some("Spaghetti topped with a blend of dolcelatte and chickpeas".to_string()),
        image_url: Some("https://example.test/spaghetti.jpg".to_string()),
        price: 19,
        quantity: 2,
    }
}

pub fn sample_order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM".to_string(),
        mobile_number: "(505) 143-3369".to_string(),
        status,
        dishes: vec![sample_dish(&format!("{id}-dish"))],
    }
}

/// One order per status, ids from the `*_ID` constants.
pub fn sample_orders() -> Vec<Order> {
    vec![
        sample_order(PENDING_ID, OrderStatus::Pending),
        sample_order(PREPARING_ID, OrderStatus::Preparing),
        sample_order(OUT_FOR_DELIVERY_ID, OrderStatus::OutForDelivery),
        sample_order(DELIVERED_ID, OrderStatus::Delivered),
    ]
}

/// Service over `sample_orders()` with sequential identifiers.
pub fn seeded_service() -> OrderService {
    OrderService::new(MemoryOrderStore::with_orders(sample_orders()), SequentialIds::new())
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// A payload that passes every create/update guard.
pub fn valid_order_data() -> Value {
    json!({
        "deliverTo": "A",
        "mobileNumber": "555",
        "status": "pending",
        "dishes": [{ "name": "Taco", "description": "Crunchy", "image_url": "taco.png", "price": 5, "quantity": 2 }]
    })
}

/// `valid_order_data()` with `patch` keys merged over it. A `null` value in
/// `patch` removes the key.
pub fn order_data_with(patch: Value) -> Value {
    let mut data = valid_order_data();
    if let (Some(obj), Some(patch)) = (data.as_object_mut(), patch.as_object()) {
        for (k, v) in patch {
            if v.is_null() {
                obj.remove(k);
            } else {
                obj.insert(k.clone(), v.clone());
            }
        }
    }
    data
}

/// Wrap a payload in the `{ "data": ... }` envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// Decode a payload into a draft, for service-level tests.
pub fn draft(data: Value) -> OrderDraft {
    serde_json::from_value(data).expect("fixture payload must decode as OrderDraft")
}
