//! Order storage.
//!
//! [`OrderStore`] is the capability the handlers need; [`MemoryOrderStore`]
//! is the process-local implementation. Nothing here validates: callers run
//! the guard chain before mutating.

use grubdash_schemas::Order;

pub trait OrderStore: Send + Sync {
    /// All orders in insertion order.
    fn list(&self) -> Vec<Order>;

    fn find(&self, id: &str) -> Option<Order>;

    fn insert(&mut self, order: Order);

    /// Replace the stored order with the same id. Returns `false` when no
    /// such order exists.
    fn update(&mut self, order: Order) -> bool;

    fn remove(&mut self, id: &str) -> Option<Order>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed store. Lookups are linear, which is fine for a process-local
/// collection and keeps insertion order for `list`.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: Vec<Order>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.id == id)
    }
}

impl OrderStore for MemoryOrderStore {
    fn list(&self) -> Vec<Order> {
        self.orders.clone()
    }

    fn find(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    fn insert(&mut self, order: Order) {
        self.orders.push(order);
    }

    fn update(&mut self, order: Order) -> bool {
        match self.position(&order.id) {
            Some(i) => {
                self.orders[i] = order;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &str) -> Option<Order> {
        let i = self.position(id)?;
        Some(self.orders.remove(i))
    }

    fn len(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grubdash_schemas::{Dish, OrderStatus};

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            deliver_to: "here".to_string(),
            mobile_number: "555".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![Dish {
                id: format!("{id}-d"),
                name: None,
                description: None,
                image_url: None,
                price: 1,
                quantity: 1,
            }],
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = MemoryOrderStore::new();
        store.insert(order("b"));
        store.insert(order("a"));
        let ids: Vec<String> = store.list().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = MemoryOrderStore::with_orders(vec![order("a"), order("b")]);
        let mut changed = order("a");
        changed.status = OrderStatus::Preparing;
        assert!(store.update(changed));
        assert_eq!(store.list()[0].status, OrderStatus::Preparing);
        assert!(!store.update(order("zzz")));
    }

    #[test]
    fn remove_returns_the_order_once() {
        let mut store = MemoryOrderStore::with_orders(vec![order("a")]);
        assert_eq!(store.remove("a").map(|o| o.id), Some("a".to_string()));
        assert!(store.remove("a").is_none());
        assert!(store.is_empty());
    }
}
