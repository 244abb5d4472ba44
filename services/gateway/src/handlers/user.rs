use axum::{
    extract::{Path, State},
    Extension,
};
use shared::proto;

use crate::{
    auth::Identity,
    domain::{CreateUserModel, UpdateUserModel, User, UserList},
    envelope::{Envelope, Reply},
    errors::{AppError, Operation, Result},
    extractors::{Pagination, ValidatedJson},
    state::AppState,
};

#[tracing::instrument(skip_all, fields(username = %body.username, caller = %identity.user_id))]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<CreateUserModel>,
) -> Result<Reply<User>> {
    let user = state
        .backends
        .auth
        .create_user(proto::CreateUserRequest {
            username: body.username,
            password: body.password,
            user_type: body.user_type,
        })
        .await
        .map_err(AppError::on(Operation::Create))?;

    tracing::info!(user_id = %user.id, "User created");
    Ok(Envelope::created(user.into()))
}

#[tracing::instrument(skip_all, fields(user_id = %id, caller = %identity.user_id))]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<User>> {
    let user = state
        .backends
        .auth
        .get_user(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Get))?;

    Ok(Envelope::ok(user.into()))
}

#[tracing::instrument(skip_all, fields(caller = %identity.user_id))]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    pagination: Pagination,
) -> Result<Reply<UserList>> {
    let list = state
        .backends
        .auth
        .list_users(pagination.into())
        .await
        .map_err(AppError::on(Operation::List))?;

    Ok(Envelope::ok(list.into()))
}

#[tracing::instrument(skip_all, fields(user_id = %body.id, caller = %identity.user_id))]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(body): ValidatedJson<UpdateUserModel>,
) -> Result<Reply<User>> {
    let user = state
        .backends
        .auth
        .update_user(proto::UpdateUserRequest {
            id: body.id,
            password: body.password,
        })
        .await
        .map_err(AppError::on(Operation::Update))?;

    tracing::info!("User updated");
    Ok(Envelope::ok(user.into()))
}

#[tracing::instrument(skip_all, fields(user_id = %id, caller = %identity.user_id))]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Reply<User>> {
    let user = state
        .backends
        .auth
        .delete_user(proto::IdRequest { id })
        .await
        .map_err(AppError::on(Operation::Delete))?;

    tracing::info!("User deleted");
    Ok(Envelope::ok(user.into()))
}
