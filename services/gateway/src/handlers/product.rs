use axum::{
    extract::{Path, State},
    Extension,
};
use shared::proto;

use crate::{
    auth::Identity,
    domain::{Product, ProductList, CreateProductModel, UpdateProductModel},
    envelope::{Envelope, Reply},
    errors::{AppError, Operation, Result},
    extractors::{Pagination, ValidatedJson},
    state::AppState,
};

#[tracing::instrument(skip_all, fields(category_id = %body.category_id, user_id = %identity.user_id))]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<CreateProductModel>,
) -> Result<Reply<Product>> {
    let product = state
        .backends
        .product
        .create_product(proto::CreateProductRequest {
            category_id: body.category_id,
            title: body.title,
            descrip: body.descrip,
            price: body.price,
        })
        .await
        .map_err(AppError::on(Operation::Create))?;

    tracing::info!(product_id = %product.id, "Product created");
    Ok(Envelope::created(product.into()))
}

#[tracing::instrument(skip_all, fields(product_id = %id, user_id = %identity.user_id))]
pub async fn get_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<Product>> {
    let product = state
        .backends
        .product
        .get_product(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Get))?;

    Ok(Envelope::ok(product.into()))
}

#[tracing::instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn list_products(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    pagination: Pagination,
) -> Result<Reply<ProductList>> {
    let list = state
        .backends
        .product
        .list_products(pagination.into())
        .await
        .map_err(AppError::on(Operation::List))?;

    tracing::debug!(count = list.products.len(), "Products listed");
    Ok(Envelope::ok(list.into()))
}

#[tracing::instrument(skip_all, fields(product_id = %body.id, user_id = %identity.user_id))]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<UpdateProductModel>,
) -> Result<Reply<Product>> {
    let product = state
        .backends
        .product
        .update_product(proto::UpdateProductRequest {
            id: body.id,
            title: body.title,
            price: body.price,
        })
        .await
        .map_err(AppError::on(Operation::Update))?;

    tracing::info!("Product updated");
    Ok(Envelope::ok(product.into()))
}

#[tracing::instrument(skip_all, fields(product_id = %id, user_id = %identity.user_id))]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<Product>> {
    let product = state
        .backends
        .product
        .delete_product(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Delete))?;

    tracing::info!("Product deleted");
    Ok(Envelope::ok(product.into()))
}
