use thiserror::Error;

use crate::draft::OrderField;

/// Error class of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, missing or out-of-range request fields.
    Validation,
    /// Unknown order identifier.
    NotFound,
    /// Disallowed state transition or deletion of a non-pending order.
    Conflict,
}

/// A guard or handler refusal. The `Display` text is the exact message
/// returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Order must include a {0}")]
    MissingField(OrderField),
    #[error("Order must include a dish")]
    MissingDishes,
    #[error("Order must include at least one dish")]
    EmptyDishes,
    #[error("Dish {index} must have a quantity that is an integer greater than 0")]
    InvalidQuantity { index: usize },
    #[error("Dish {index} must have a price that is an integer greater than 0")]
    InvalidPrice { index: usize },
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,
    #[error("Order id does not match route id. Order: {body_id}, Route: {route_id}")]
    IdMismatch { body_id: String, route_id: String },
    #[error("Request body is invalid: {0}")]
    MalformedBody(String),
    #[error("Order not found {0}")]
    NotFound(String),
    #[error("A delivered order cannot be changed")]
    DeliveredOrderImmutable,
    #[error("Order status must be pending")]
    NotPending,
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::DeliveredOrderImmutable | OrderError::NotPending => ErrorKind::Conflict,
            _ => ErrorKind::Validation,
        }
    }

    /// HTTP status code surfaced for this error. Conflicts are reported as
    /// 400, the same as validation failures.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation | ErrorKind::Conflict => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_public_contract() {
        assert_eq!(
            OrderError::MissingField(OrderField::DeliverTo).to_string(),
            "Order must include a deliverTo"
        );
        assert_eq!(
            OrderError::InvalidPrice { index: 2 }.to_string(),
            "Dish 2 must have a price that is an integer greater than 0"
        );
        assert_eq!(
            OrderError::NotFound("abc".to_string()).to_string(),
            "Order not found abc"
        );
    }

    #[test]
    fn status_codes_follow_kind() {
        assert_eq!(OrderError::NotFound("x".into()).status_code(), 404);
        assert_eq!(OrderError::NotPending.status_code(), 400);
        assert_eq!(OrderError::NotPending.kind(), ErrorKind::Conflict);
        assert_eq!(OrderError::EmptyDishes.kind(), ErrorKind::Validation);
    }
}
