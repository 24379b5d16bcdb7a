//! Seed data loading.
//!
//! A seed file is JSON: either a bare array of orders or the same array
//! wrapped as `{ "data": [...] }` (the shape `GET /orders` returns, so a
//! captured response can be fed back in).

use std::collections::BTreeSet;
use std::fs;

use anyhow::{bail, Context, Result};
use grubdash_schemas::Order;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDoc {
    Bare(Vec<Order>),
    Wrapped { data: Vec<Order> },
}

pub fn load_seed_file(path: &str) -> Result<Vec<Order>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read seed file: {path}"))?;
    parse_seed_json(&raw).with_context(|| format!("invalid seed file: {path}"))
}

pub fn parse_seed_json(raw: &str) -> Result<Vec<Order>> {
    let doc: SeedDoc = serde_json::from_str(raw).context("parse seed json")?;
    let orders = match doc {
        SeedDoc::Bare(orders) | SeedDoc::Wrapped { data: orders } => orders,
    };
    check_seed_invariants(&orders)?;
    Ok(orders)
}

/// Seeds must satisfy the same invariants as orders created through the API.
fn check_seed_invariants(orders: &[Order]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for order in orders {
        if !seen.insert(order.id.as_str()) {
            bail!("duplicate order id in seed: {}", order.id);
        }
        if order.dishes.is_empty() {
            bail!("seed order {} has no dishes", order.id);
        }
        for (i, dish) in order.dishes.iter().enumerate() {
            if dish.price == 0 || dish.quantity == 0 {
                bail!(
                    "seed order {} dish {i} must have price and quantity greater than 0",
                    order.id
                );
            }
        }
    }
    Ok(())
}
