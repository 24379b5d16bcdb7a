//! Axum router and all HTTP handlers for grubdash-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Handlers only translate HTTP to `OrderService` calls:
//! the guard chains live in `grubdash-orders`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use grubdash_orders::OrderRequest;
use grubdash_schemas::Order;
use tracing::{debug, info};

use crate::{
    api_types::{DataEnvelope, HealthResponse},
    error::ApiError,
    state::AppState,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/orders",
            get(list_orders)
                .post(create_order)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/:order_id",
            get(read_order)
                .put(update_order)
                .delete(destroy_order)
                .fallback(method_not_allowed),
        )
        .fallback(path_not_found)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let orders = st.orders.read().await.len();
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service.to_string(),
            version: st.build.version.to_string(),
            orders,
        }),
    )
}

// ---------------------------------------------------------------------------
// /orders
// ---------------------------------------------------------------------------

pub(crate) async fn list_orders(State(st): State<Arc<AppState>>) -> Json<DataEnvelope<Vec<Order>>> {
    let orders = st.orders.read().await.list();
    debug!(count = orders.len(), "orders/list");
    Json(DataEnvelope::new(orders))
}

pub(crate) async fn create_order(
    State(st): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<DataEnvelope<Order>>), ApiError> {
    let draft = OrderRequest::from_body(&body)?.into_draft();

    let created = st.orders.write().await.create(&draft)?;

    info!(order_id = %created.id, "orders/create");
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(created))))
}

// ---------------------------------------------------------------------------
// /orders/:order_id
// ---------------------------------------------------------------------------

pub(crate) async fn read_order(
    State(st): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let order = st.orders.read().await.read(&order_id)?;
    debug!(order_id = %order.id, "orders/read");
    Ok(Json(DataEnvelope::new(order)))
}

pub(crate) async fn update_order(
    State(st): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let decoded = OrderRequest::from_body(&body);
    let mut svc = st.orders.write().await;

    // orderExists runs before any body check, including decoding.
    let draft = match decoded {
        Ok(req) => req.into_draft(),
        Err(err) => {
            svc.order_exists(&order_id)?;
            return Err(err.into());
        }
    };

    let updated = svc.update(&order_id, &draft)?;
    drop(svc);

    info!(order_id = %updated.id, status = %updated.status, "orders/update");
    Ok(Json(DataEnvelope::new(updated)))
}

pub(crate) async fn destroy_order(
    State(st): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    st.orders.write().await.destroy(&order_id)?;
    info!(%order_id, "orders/delete");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

pub(crate) async fn path_not_found(uri: Uri) -> ApiError {
    ApiError::PathNotFound(uri.path().to_string())
}
