use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorCategory, PERMISSION_DENIED_MESSAGE, UNAUTHORIZED_MESSAGE};

use crate::{backend::BackendError, envelope::ErrorBody};

/// Which kind of backend call failed; decides how the failure is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    List,
    Update,
    Delete,
    Login,
    /// Secondary lookup made while aggregating another resource
    Lookup,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Binding(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{message}")]
    Transport { status: StatusCode, message: String },

    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    #[error("{}", PERMISSION_DENIED_MESSAGE)]
    PermissionDenied,
}

impl AppError {
    /// Surface a backend failure the way the failing operation's route promises.
    ///
    /// Rejections and transport failures stay distinct variants even where they
    /// share a status code.
    pub fn from_backend(op: Operation, err: BackendError) -> Self {
        match (op, err) {
            (Operation::Lookup, err) => AppError::NotFound(err.to_string()),
            (Operation::Get | Operation::Update, BackendError::Rejected(message)) => {
                AppError::NotFound(message)
            }
            (Operation::Create | Operation::Delete, BackendError::Rejected(message)) => {
                AppError::Rejected {
                    status: StatusCode::BAD_REQUEST,
                    message,
                }
            }
            (Operation::List, BackendError::Rejected(message)) => AppError::Rejected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
            (Operation::Login, BackendError::Rejected(message)) => AppError::Rejected {
                status: StatusCode::UNAUTHORIZED,
                message,
            },
            (Operation::Get | Operation::Update, BackendError::Unavailable(message)) => {
                AppError::Transport {
                    status: StatusCode::NOT_FOUND,
                    message,
                }
            }
            (Operation::Create | Operation::Delete, BackendError::Unavailable(message)) => {
                AppError::Transport {
                    status: StatusCode::BAD_REQUEST,
                    message,
                }
            }
            (Operation::List | Operation::Login, BackendError::Unavailable(message)) => {
                AppError::Transport {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                }
            }
        }
    }

    /// Bind `from_backend` to an operation, for use with `map_err`
    pub fn on(op: Operation) -> impl Fn(BackendError) -> Self {
        move |err| Self::from_backend(op, err)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Binding(_) => ErrorCategory::Validation,
            AppError::NotFound(_) => ErrorCategory::NotFound,
            AppError::Rejected { .. } => ErrorCategory::Upstream,
            AppError::Transport { .. } => ErrorCategory::Transport,
            AppError::Unauthorized | AppError::PermissionDenied => ErrorCategory::Unauthorized,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Rejected { status, .. } | AppError::Transport { status, .. } => *status,
            other => StatusCode::from_u16(other.category().status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let category = self.category();
        let status = self.status();
        let error_message = self.to_string();

        match category.log_level() {
            "error" => tracing::error!(category = %category, status = status.as_u16(), error = %error_message, "Request failed"),
            "warn" => tracing::warn!(category = %category, status = status.as_u16(), error = %error_message, "Request failed"),
            _ => tracing::info!(category = %category, status = status.as_u16(), error = %error_message, "Request failed"),
        }

        metrics::counter!("gateway_errors_total", "category" => category.as_str()).increment(1);

        let body = Json(ErrorBody {
            error: error_message,
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
