//! Shared runtime state for grubdash-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. The order service sits
//! behind one `RwLock`: reads share it, mutations hold the write lock for the
//! whole guard-chain-plus-store operation.

use std::sync::Arc;

use grubdash_orders::OrderService;
use grubdash_schemas::Order;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Static build metadata included in health responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Clone)]
pub struct AppState {
    pub build: BuildInfo,
    pub orders: Arc<RwLock<OrderService>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(Vec::new())
    }
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self {
            build: BuildInfo {
                service: "grubdash-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            orders: Arc::new(RwLock::new(orders)),
        }
    }

    /// Memory-backed state seeded with `orders`.
    pub fn in_memory(orders: Vec<Order>) -> Self {
        Self::new(OrderService::in_memory(orders))
    }
}
