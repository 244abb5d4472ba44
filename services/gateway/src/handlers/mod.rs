pub mod category;
pub mod health;
pub mod login;
pub mod order;
pub mod product;
pub mod user;

use crate::errors::AppError;

/// Fallback for paths no route matches
pub async fn route_not_found() -> AppError {
    AppError::NotFound("route not found".to_string())
}
