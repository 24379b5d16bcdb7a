//! grubdash-orders
//!
//! Order domain for the GrubDash service:
//! - request drafts and the guard chain that validates them
//! - the `OrderStore` capability and its in-memory implementation
//! - identifier generation and seed loading
//! - `OrderService`, which composes guards with the store operations

pub mod draft;
pub mod error;
pub mod guards;
pub mod ids;
pub mod seed;
pub mod service;
pub mod store;

pub use draft::{DishDraft, DishLine, OrderDraft, OrderField, OrderRequest};
pub use error::{ErrorKind, OrderError};
pub use guards::{run_chain, Checked, Guard, GuardInput, ValidOrder, CREATE_CHAIN, UPDATE_CHAIN};
pub use ids::{IdGenerator, RandomIds};
pub use service::OrderService;
pub use store::{MemoryOrderStore, OrderStore};
