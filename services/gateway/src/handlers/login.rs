use axum::extract::State;
use shared::proto;

use crate::{
    domain::{LoginModel, TokenResponse},
    envelope::{Envelope, Reply},
    errors::{AppError, Operation, Result},
    extractors::ValidatedJson,
    state::AppState,
};

#[tracing::instrument(skip_all, fields(username = %body.username))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginModel>,
) -> Result<Reply<TokenResponse>> {
    let token = state
        .backends
        .auth
        .login(proto::LoginRequest {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(AppError::on(Operation::Login))?;

    tracing::info!("Login succeeded");
    Ok(Envelope::created(token.into()))
}
