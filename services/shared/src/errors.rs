/// Error categories shared by the gateway and its backends
///
/// Every failure the gateway reports falls into exactly one category. The
/// category decides the log level and the default HTTP status; individual
/// operations may override the status (see the gateway's operation mapping)
/// but never the category, so logs and metrics keep the distinction even
/// where the REST contract does not.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Malformed or missing input; never reaches a backend (400)
    Validation,

    /// Backend reports a missing resource, or an aggregation lookup failed (404)
    NotFound,

    /// Backend answered with a business-rule failure (400)
    Upstream,

    /// Backend unreachable or RPC-level failure (500)
    Transport,

    /// Credential rejected or role lacks the route's capability (401)
    Unauthorized,
}

impl ErrorCategory {
    /// Default HTTP status code for the category
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorCategory::Validation => 400,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Upstream => 400,
            ErrorCategory::Transport => 500,
            ErrorCategory::Unauthorized => 401,
        }
    }

    /// Log level the category is reported at
    pub fn log_level(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "warn",
            ErrorCategory::NotFound => "info",
            ErrorCategory::Upstream => "warn",
            ErrorCategory::Transport => "error",
            ErrorCategory::Unauthorized => "warn",
        }
    }

    /// Stable label used in metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Upstream => "upstream",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
