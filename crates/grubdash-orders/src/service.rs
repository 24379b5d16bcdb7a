//! Order handlers: list / create / read / update / destroy.
//!
//! Each mutating operation runs its guard chain before touching the store.
//! Handlers trust the chain and do no validation of their own.

use grubdash_schemas::{Dish, Order, OrderStatus};
use tracing::info;

use crate::draft::{DishLine, OrderDraft};
use crate::error::OrderError;
use crate::guards::{run_chain, GuardInput, CREATE_CHAIN, UPDATE_CHAIN};
use crate::ids::{IdGenerator, RandomIds};
use crate::store::{MemoryOrderStore, OrderStore};

/// Owns the store and the id source. Shared by the daemon behind a lock.
pub struct OrderService {
    store: Box<dyn OrderStore>,
    ids: Box<dyn IdGenerator>,
}

impl OrderService {
    pub fn new(store: impl OrderStore + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            store: Box::new(store),
            ids: Box::new(ids),
        }
    }

    /// Memory store pre-filled with `seed`, random identifiers.
    pub fn in_memory(seed: Vec<Order>) -> Self {
        Self::new(MemoryOrderStore::with_orders(seed), RandomIds)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    pub fn list(&self) -> Vec<Order> {
        self.store.list()
    }

    /// `orderExists`: resolve the order named by the route.
    pub fn order_exists(&self, order_id: &str) -> Result<Order, OrderError> {
        self.store
            .find(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    pub fn read(&self, order_id: &str) -> Result<Order, OrderError> {
        self.order_exists(order_id)
    }

    /// Create an order. The order and every dish get fresh identifiers;
    /// client-supplied dish ids are ignored.
    pub fn create(&mut self, draft: &OrderDraft) -> Result<Order, OrderError> {
        let input = GuardInput {
            route_id: None,
            draft,
            existing: None,
        };
        let accepted = run_chain(CREATE_CHAIN, &input)?.into_valid()?;

        let order = Order {
            id: self.ids.next_id(),
            deliver_to: accepted.deliver_to,
            mobile_number: accepted.mobile_number,
            status: accepted.status,
            dishes: accepted
                .dishes
                .into_iter()
                .map(|line| self.dish_from_line(line, false))
                .collect(),
        };
        self.store.insert(order.clone());

        info!(order_id = %order.id, dishes = order.dishes.len(), "order created");
        Ok(order)
    }

    /// Overwrite every mutable field of an existing order. The order id never
    /// changes; dish ids are kept when the client sends them.
    pub fn update(&mut self, order_id: &str, draft: &OrderDraft) -> Result<Order, OrderError> {
        let existing = self.order_exists(order_id)?;
        let input = GuardInput {
            route_id: Some(order_id),
            draft,
            existing: Some(&existing),
        };
        let accepted = run_chain(UPDATE_CHAIN, &input)?.into_valid()?;

        let updated = Order {
            id: existing.id.clone(),
            deliver_to: accepted.deliver_to,
            mobile_number: accepted.mobile_number,
            status: accepted.status,
            dishes: accepted
                .dishes
                .into_iter()
                .map(|line| self.dish_from_line(line, true))
                .collect(),
        };
        if !self.store.update(updated.clone()) {
            return Err(OrderError::NotFound(order_id.to_string()));
        }

        info!(
            order_id = %updated.id,
            from = %existing.status,
            to = %updated.status,
            "order updated"
        );
        Ok(updated)
    }

    /// Remove a pending order. Any other status is refused and the order
    /// stays in the store.
    pub fn destroy(&mut self, order_id: &str) -> Result<Order, OrderError> {
        let existing = self.order_exists(order_id)?;
        if existing.status != OrderStatus::Pending {
            return Err(OrderError::NotPending);
        }
        let removed = self
            .store
            .remove(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        info!(order_id = %removed.id, "order deleted");
        Ok(removed)
    }

    fn dish_from_line(&self, line: DishLine, keep_id: bool) -> Dish {
        let id = match line.id {
            Some(id) if keep_id => id,
            _ => self.ids.next_id(),
        };
        Dish {
            id,
            name: line.name,
            description: line.description,
            image_url: line.image_url,
            price: line.price,
            quantity: line.quantity,
        }
    }
}
