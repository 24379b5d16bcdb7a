//! Scenario: order lifecycle through `OrderService`
//!
//! Covers the status rules that govern update and delete:
//! - create assigns fresh order and dish ids
//! - update keeps the order id and client dish ids
//! - a delivered order cannot be updated
//! - only pending orders can be deleted; refused deletes leave the store intact

use grubdash_orders::{OrderError, OrderField};
use grubdash_schemas::OrderStatus;
use grubdash_testkit::{
    draft, order_data_with, seeded_service, valid_order_data, DELIVERED_ID, PENDING_ID,
    PREPARING_ID,
};
use serde_json::json;

#[test]
fn create_assigns_fresh_ids_and_appends() {
    let mut svc = seeded_service();
    let before = svc.len();

    let data = order_data_with(json!({
        "dishes": [{ "id": "client-chosen", "name": "Taco", "price": 5, "quantity": 2 }]
    }));
    let created = svc.create(&draft(data)).unwrap();

    assert_eq!(created.id, "id-1");
    assert_eq!(created.dishes[0].id, "id-2", "client dish ids are ignored on create");
    assert_eq!(created.dishes[0].price, 5);
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(svc.len(), before + 1);
    assert_eq!(svc.list().last().map(|o| o.id.as_str()), Some("id-1"));
}

#[test]
fn create_refusal_leaves_store_unchanged() {
    let mut svc = seeded_service();
    let before = svc.list();

    for (patch, expected) in [
        (json!({ "deliverTo": null }), OrderError::MissingField(OrderField::DeliverTo)),
        (json!({ "mobileNumber": "" }), OrderError::MissingField(OrderField::MobileNumber)),
        (json!({ "status": null }), OrderError::MissingField(OrderField::Status)),
        (json!({ "dishes": null }), OrderError::MissingDishes),
        (json!({ "dishes": [] }), OrderError::EmptyDishes),
        (json!({ "status": "shipped" }), OrderError::InvalidStatus),
    ] {
        let err = svc.create(&draft(order_data_with(patch.clone()))).unwrap_err();
        assert_eq!(err, expected, "patch {patch}");
    }

    assert_eq!(svc.list(), before);
}

#[test]
fn read_is_idempotent() {
    let svc = seeded_service();
    let a = svc.read(PENDING_ID).unwrap();
    let b = svc.read(PENDING_ID).unwrap();
    assert_eq!(a, b);

    assert_eq!(
        svc.read("nope").unwrap_err(),
        OrderError::NotFound("nope".to_string())
    );
}

#[test]
fn update_overwrites_fields_and_keeps_ids() {
    let mut svc = seeded_service();
    let data = order_data_with(json!({
        "id": PREPARING_ID,
        "status": "out-for-delivery",
        "dishes": [
            { "id": "kept", "price": 7, "quantity": 1 },
            { "price": 3, "quantity": 4 }
        ]
    }));

    let updated = svc.update(PREPARING_ID, &draft(data)).unwrap();
    assert_eq!(updated.id, PREPARING_ID);
    assert_eq!(updated.deliver_to, "A");
    assert_eq!(updated.status, OrderStatus::OutForDelivery);
    assert_eq!(updated.dishes[0].id, "kept");
    assert_eq!(updated.dishes[1].id, "id-1");
    assert_eq!(svc.read(PREPARING_ID).unwrap(), updated);
}

#[test]
fn delivered_order_cannot_be_updated() {
    let mut svc = seeded_service();
    let before = svc.read(DELIVERED_ID).unwrap();

    let err = svc
        .update(DELIVERED_ID, &draft(valid_order_data()))
        .unwrap_err();
    assert_eq!(err, OrderError::DeliveredOrderImmutable);
    assert_eq!(err.to_string(), "A delivered order cannot be changed");
    assert_eq!(svc.read(DELIVERED_ID).unwrap(), before);
}

#[test]
fn update_can_move_an_order_to_delivered() {
    let mut svc = seeded_service();
    let data = order_data_with(json!({ "status": "delivered" }));
    let updated = svc.update(PENDING_ID, &draft(data)).unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);

    // ...after which it is terminal.
    let err = svc
        .update(PENDING_ID, &draft(valid_order_data()))
        .unwrap_err();
    assert_eq!(err, OrderError::DeliveredOrderImmutable);
}

#[test]
fn update_with_mismatched_body_id_is_refused() {
    let mut svc = seeded_service();
    let data = order_data_with(json!({ "id": PREPARING_ID }));
    let err = svc.update(PENDING_ID, &draft(data)).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Order id does not match route id"));
}

#[test]
fn only_pending_orders_can_be_destroyed() {
    let mut svc = seeded_service();

    for id in [PREPARING_ID, DELIVERED_ID] {
        assert_eq!(svc.destroy(id).unwrap_err(), OrderError::NotPending);
        assert!(svc.read(id).is_ok(), "{id} must remain after a refused delete");
    }

    let removed = svc.destroy(PENDING_ID).unwrap();
    assert_eq!(removed.id, PENDING_ID);
    assert_eq!(
        svc.read(PENDING_ID).unwrap_err(),
        OrderError::NotFound(PENDING_ID.to_string())
    );
}
