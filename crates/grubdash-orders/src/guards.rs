//! Validation chain for order payloads.
//!
//! A chain is an ordered slice of [`Guard`] values. [`run_chain`] evaluates
//! them left to right and returns the first refusal; later guards and the
//! handler never run once a guard refuses. Each passing guard records what it
//! parsed in [`Checked`], so the handler works from the chain's own results.
//!
//! `orderExists` is not a [`Guard`] variant: it needs the store, so
//! [`crate::service::OrderService`] resolves the order first and hands it to
//! the chain through [`GuardInput::existing`].

use grubdash_schemas::{Order, OrderStatus};
use serde::Deserialize;
use serde_json::Value;

use crate::draft::{positive_integer, DishDraft, DishLine, OrderDraft, OrderField};
use crate::error::OrderError;

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Everything a guard may inspect.
#[derive(Debug, Clone, Copy)]
pub struct GuardInput<'a> {
    /// `:orderId` path segment, when the route has one.
    pub route_id: Option<&'a str>,
    pub draft: &'a OrderDraft,
    /// The stored order resolved by `orderExists`.
    pub existing: Option<&'a Order>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The named field is present and non-empty.
    BodyDataHas(OrderField),
    /// `dishes` is a non-empty array whose every dish has a positive integer
    /// quantity and price.
    DishesArrayIsValid,
    /// The payload status is one of the known values.
    StatusIsKnown,
    /// The stored order is not delivered, and the payload status is known.
    StatusIsValid,
    /// A payload id, when present, equals the route id.
    IdIsValid,
}

/// Values parsed by the guards of a chain that passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checked {
    pub deliver_to: Option<String>,
    pub mobile_number: Option<String>,
    pub status: Option<OrderStatus>,
    pub dishes: Option<Vec<DishLine>>,
}

/// A payload every field of which was accepted by the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<DishLine>,
}

impl Checked {
    /// Collect the parsed fields. A field with no guard in the chain is
    /// reported as the refusal that guard would have produced.
    pub fn into_valid(self) -> Result<ValidOrder, OrderError> {
        Ok(ValidOrder {
            deliver_to: self
                .deliver_to
                .ok_or(OrderError::MissingField(OrderField::DeliverTo))?,
            mobile_number: self
                .mobile_number
                .ok_or(OrderError::MissingField(OrderField::MobileNumber))?,
            status: self.status.ok_or(OrderError::InvalidStatus)?,
            dishes: self.dishes.ok_or(OrderError::MissingDishes)?,
        })
    }
}

impl Guard {
    pub fn name(&self) -> &'static str {
        match self {
            Guard::BodyDataHas(OrderField::DeliverTo) => "body_data_has_deliver_to",
            Guard::BodyDataHas(OrderField::MobileNumber) => "body_data_has_mobile_number",
            Guard::BodyDataHas(OrderField::Status) => "body_data_has_status",
            Guard::DishesArrayIsValid => "dishes_array_is_valid",
            Guard::StatusIsKnown => "status_is_known",
            Guard::StatusIsValid => "status_is_valid",
            Guard::IdIsValid => "id_is_valid",
        }
    }

    pub fn check(&self, input: &GuardInput<'_>, out: &mut Checked) -> Result<(), OrderError> {
        match self {
            Guard::BodyDataHas(field) => {
                let value = input
                    .draft
                    .field(*field)
                    .ok_or(OrderError::MissingField(*field))?
                    .to_string();
                match field {
                    OrderField::DeliverTo => out.deliver_to = Some(value),
                    OrderField::MobileNumber => out.mobile_number = Some(value),
                    // Recorded once StatusIsKnown / StatusIsValid parse it.
                    OrderField::Status => {}
                }
            }
            Guard::DishesArrayIsValid => {
                out.dishes = Some(validate_dishes(input.draft.dishes.as_ref())?);
            }
            Guard::StatusIsKnown => out.status = Some(parse_status(input.draft)?),
            Guard::StatusIsValid => {
                // Terminal check first so its message wins over the generic one.
                if input.existing.is_some_and(|o| o.status.is_terminal()) {
                    return Err(OrderError::DeliveredOrderImmutable);
                }
                out.status = Some(parse_status(input.draft)?);
            }
            Guard::IdIsValid => {
                if let (Some(body_id), Some(route_id)) = (input.draft.body_id(), input.route_id) {
                    if body_id != route_id {
                        return Err(OrderError::IdMismatch {
                            body_id: body_id.to_string(),
                            route_id: route_id.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Guards run before `create`.
pub const CREATE_CHAIN: &[Guard] = &[
    Guard::BodyDataHas(OrderField::DeliverTo),
    Guard::BodyDataHas(OrderField::MobileNumber),
    Guard::BodyDataHas(OrderField::Status),
    Guard::DishesArrayIsValid,
    Guard::StatusIsKnown,
];

/// Guards run before `update`, after the order has been resolved.
pub const UPDATE_CHAIN: &[Guard] = &[
    Guard::BodyDataHas(OrderField::DeliverTo),
    Guard::BodyDataHas(OrderField::MobileNumber),
    Guard::BodyDataHas(OrderField::Status),
    Guard::DishesArrayIsValid,
    Guard::StatusIsValid,
    Guard::IdIsValid,
];

/// Evaluate `chain` in order. Returns the first refusal, or everything the
/// guards parsed if all of them pass.
pub fn run_chain(chain: &[Guard], input: &GuardInput<'_>) -> Result<Checked, OrderError> {
    let mut out = Checked::default();
    for guard in chain {
        if let Err(err) = guard.check(input, &mut out) {
            tracing::debug!(guard = guard.name(), error = %err, "guard refused");
            return Err(err);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Parse the payload status.
pub fn parse_status(draft: &OrderDraft) -> Result<OrderStatus, OrderError> {
    draft
        .field(OrderField::Status)
        .and_then(|s| s.parse().ok())
        .ok_or(OrderError::InvalidStatus)
}

/// Validate the raw `dishes` value and convert it into dish lines.
///
/// The first violation wins: dishes are checked in index order, quantity
/// before price.
pub fn validate_dishes(dishes: Option<&Value>) -> Result<Vec<DishLine>, OrderError> {
    let value = match dishes {
        Some(v) if !is_falsy(v) => v,
        _ => return Err(OrderError::MissingDishes),
    };
    let items = match value.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(OrderError::EmptyDishes),
    };

    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(raw) = item.as_object() else {
            return Err(OrderError::InvalidQuantity { index });
        };
        // Range checks read the raw object so they win over text-field decoding.
        let quantity =
            positive_integer(raw.get("quantity")).ok_or(OrderError::InvalidQuantity { index })?;
        let price = positive_integer(raw.get("price")).ok_or(OrderError::InvalidPrice { index })?;

        let dish = DishDraft::deserialize(item)
            .map_err(|e| OrderError::MalformedBody(format!("dish {index}: {e}")))?;

        lines.push(DishLine {
            id: dish.id.filter(|id| !id.is_empty()),
            name: dish.name,
            description: dish.description,
            image_url: dish.image_url,
            price,
            quantity,
        });
    }
    Ok(lines)
}

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
