use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use shared::{proto::ListRequest, DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_SEARCH};
use validator::Validate;

use crate::errors::AppError;

/// JSON body extractor that binds and validates before the handler runs
///
/// Deserialization failures (bad JSON, missing field, wrong type, wrong content
/// type) and `validator` rule failures are both rejected as binding errors, so
/// no backend call is ever made with a half-bound body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Binding(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Binding(errors.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

#[derive(Debug, Deserialize)]
struct RawPagination {
    offset: Option<String>,
    limit: Option<String>,
    search: Option<String>,
}

/// Offset/limit/search window of a list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i32,
    pub limit: i32,
    pub search: String,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            search: DEFAULT_SEARCH.to_string(),
        }
    }
}

impl Pagination {
    fn from_raw(raw: RawPagination) -> Result<Self, AppError> {
        Ok(Self {
            offset: parse_bound("offset", raw.offset.as_deref(), DEFAULT_OFFSET)?,
            limit: parse_bound("limit", raw.limit.as_deref(), DEFAULT_LIMIT)?,
            search: raw.search.unwrap_or_else(|| DEFAULT_SEARCH.to_string()),
        })
    }
}

impl From<Pagination> for ListRequest {
    fn from(p: Pagination) -> Self {
        ListRequest {
            offset: p.offset,
            limit: p.limit,
            search: p.search,
        }
    }
}

fn parse_bound(name: &str, raw: Option<&str>, default: i32) -> Result<i32, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let value: i32 = raw
        .parse()
        .map_err(|e| AppError::Binding(format!("invalid {name} {raw:?}: {e}")))?;

    if value < 0 {
        return Err(AppError::Binding(format!(
            "invalid {name} {raw:?}: must not be negative"
        )));
    }

    Ok(value)
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPagination>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Binding(rejection.body_text()))?;

        let pagination = Pagination::from_raw(raw)?;
        tracing::debug!(
            offset = pagination.offset,
            limit = pagination.limit,
            search = %pagination.search,
            "Pagination bound"
        );
        Ok(pagination)
    }
}
