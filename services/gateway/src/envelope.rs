//! Uniform response envelope.
//!
//! Success renders `{"message": "OK", "data": ...}`; failures are rendered by
//! [`crate::errors::AppError`] as `{"error": "..."}`. A response carries one
//! shape or the other, never both.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use shared::SUCCESS_MESSAGE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// What every successful handler returns
pub type Reply<T> = (StatusCode, Json<Envelope<T>>);

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }

    /// 200 with the envelope
    pub fn ok(data: T) -> Reply<T> {
        (StatusCode::OK, Json(Self::new(data)))
    }

    /// 201 with the envelope
    pub fn created(data: T) -> Reply<T> {
        (StatusCode::CREATED, Json(Self::new(data)))
    }
}
