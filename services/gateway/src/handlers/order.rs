//! Order routes.
//!
//! Orders span two backends. Both aggregation points run their calls one
//! after the other because the second call's input comes out of the first:
//!
//! - creation checks that the referenced product exists before the order
//!   backend is asked to write anything;
//! - lookup fetches the order, then the product it references, and returns
//!   both or nothing.
//!
//! The pre-creation check is not a lock: the product may disappear between
//! the check and the write.

use axum::{
    extract::{Path, State},
    Extension,
};
use shared::proto;

use crate::{
    auth::Identity,
    backend::BackendClients,
    domain::{CreateOrderModel, Order, OrderList, PackedOrder},
    errors::{AppError, Operation, Result},
    envelope::{Envelope, Reply},
    extractors::{Pagination, ValidatedJson},
    state::AppState,
};

#[tracing::instrument(skip_all, fields(product_id = %body.product_id, user_id = %identity.user_id))]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<CreateOrderModel>,
) -> Result<Reply<Order>> {
    ensure_product_exists(&state.backends, &body.product_id).await?;

    let order = state
        .backends
        .order
        .create_order(proto::CreateOrderRequest {
            product_id: body.product_id,
            quantity: body.quantity,
            user_name: body.user_name,
            user_address: body.user_address,
            user_phone: body.user_phone,
        })
        .await
        .map_err(AppError::on(Operation::Create))?;

    tracing::info!(order_id = %order.id, "Order created");
    metrics::counter!("orders_created_total").increment(1);
    Ok(Envelope::created(order.into()))
}

#[tracing::instrument(skip_all, fields(order_id = %id, user_id = %identity.user_id))]
pub async fn get_order(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<PackedOrder>> {
    let packed = fetch_packed_order(&state.backends, id).await?;
    Ok(Envelope::ok(packed))
}

#[tracing::instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    pagination: Pagination,
) -> Result<Reply<OrderList>> {
    let list = state
        .backends
        .order
        .list_orders(pagination.into())
        .await
        .map_err(AppError::on(Operation::List))?;

    tracing::debug!(count = list.orders.len(), "Orders listed");
    Ok(Envelope::ok(list.into()))
}

/// Fail with not-found unless the product backend knows `product_id`
async fn ensure_product_exists(backends: &BackendClients, product_id: &str) -> Result<()> {
    backends
        .product
        .get_product(proto::IdRequest {
            id: product_id.to_string(),
        })
        .await
        .map_err(AppError::on(Operation::Lookup))?;

    tracing::debug!("Referenced product exists");
    Ok(())
}

async fn fetch_packed_order(backends: &BackendClients, id: String) -> Result<PackedOrder> {
    let order = backends
        .order
        .get_order(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Get))?;

    let product_id = order
        .product
        .as_ref()
        .map(|product| product.id.clone())
        .filter(|product_id| !product_id.is_empty())
        .ok_or_else(|| AppError::NotFound(format!("order {} has no product reference", order.id)))?;

    let product = backends
        .product
        .get_product(proto::IdRequest { id: product_id })
        .await
        .map_err(AppError::on(Operation::Lookup))?;

    tracing::debug!(product_id = %product.id, "Order packed with product");
    Ok(PackedOrder::pack(order, product))
}
