use axum::{
    extract::{Path, State},
    Extension,
};
use shared::proto;

use crate::{
    auth::Identity,
    domain::{Category, CategoryList, CreateCategoryModel, UpdateCategoryModel},
    envelope::{Envelope, Reply},
    errors::{AppError, Operation, Result},
    extractors::{Pagination, ValidatedJson},
    state::AppState,
};

#[tracing::instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn create_category(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<CreateCategoryModel>,
) -> Result<Reply<Category>> {
    let category = state
        .backends
        .category
        .create_category(proto::CreateCategoryRequest { title: body.title })
        .await
        .map_err(AppError::on(Operation::Create))?;

    tracing::info!(category_id = %category.id, "Category created");
    Ok(Envelope::created(category.into()))
}

#[tracing::instrument(skip_all, fields(category_id = %id, user_id = %identity.user_id))]
pub async fn get_category(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<Category>> {
    let category = state
        .backends
        .category
        .get_category(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Get))?;

    Ok(Envelope::ok(category.into()))
}

#[tracing::instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn list_categories(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    pagination: Pagination,
) -> Result<Reply<CategoryList>> {
    let list = state
        .backends
        .category
        .list_categories(pagination.into())
        .await
        .map_err(AppError::on(Operation::List))?;

    tracing::debug!(count = list.categories.len(), "Categories listed");
    Ok(Envelope::ok(list.into()))
}

#[tracing::instrument(skip_all, fields(category_id = %body.id, user_id = %identity.user_id))]
pub async fn update_category(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<UpdateCategoryModel>,
) -> Result<Reply<Category>> {
    let category = state
        .backends
        .category
        .update_category(proto::UpdateCategoryRequest {
            id: body.id,
            title: body.title,
        })
        .await
        .map_err(AppError::on(Operation::Update))?;

    tracing::info!("Category updated");
    Ok(Envelope::ok(category.into()))
}

#[tracing::instrument(skip_all, fields(category_id = %id, user_id = %identity.user_id))]
pub async fn delete_category(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<Category>> {
    let category = state
        .backends
        .category
        .delete_category(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Delete))?;

    tracing::info!("Category deleted");
    Ok(Envelope::ok(category.into()))
}
