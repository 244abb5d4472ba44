//! Authorization gate.
//!
//! Every protected route group is wrapped in [`authorize`] with the
//! [`AccessPolicy`] chosen when the router is built. The gate asks the auth
//! backend about the caller's credential and either rejects the request or
//! hands the handler an explicit [`Identity`]. A rejection returns before
//! `next` is ever polled, so no handler runs after one.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use shared::{proto::TokenRequest, Capability, Role};

use crate::{
    backend::{BackendClients, BackendError},
    errors::AppError,
    state::AppState,
};

/// Who is calling, as decided by the auth backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    /// `None` when the backend's role tag is not one the gateway knows
    pub role: Option<Role>,
}

impl Identity {
    pub fn has(&self, capability: Capability) -> bool {
        self.role.is_some_and(|role| role.has(capability))
    }
}

/// What a route demands of its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any identity the auth backend accepts
    Authenticated,
    /// An identity whose role grants the capability
    Require(Capability),
}

impl AccessPolicy {
    pub fn admits(&self, identity: &Identity) -> bool {
        match self {
            AccessPolicy::Authenticated => true,
            AccessPolicy::Require(capability) => identity.has(*capability),
        }
    }
}

/// State handed to the gate middleware of one route group
#[derive(Clone)]
pub struct Gate {
    backends: BackendClients,
    policy: AccessPolicy,
}

impl Gate {
    pub fn new(state: &AppState, policy: AccessPolicy) -> Self {
        Self {
            backends: state.backends.clone(),
            policy,
        }
    }

    /// Validate `token` and check it against the policy
    pub async fn check(&self, token: String) -> Result<Identity, AppError> {
        let response = match self.backends.auth.has_access(TokenRequest { token }).await {
            Ok(response) => response,
            Err(BackendError::Unavailable(message)) => {
                record("error");
                return Err(AppError::Transport {
                    status: axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                });
            }
            Err(BackendError::Rejected(message)) => {
                tracing::debug!(error = %message, "Auth backend refused the credential");
                record("unauthorized");
                return Err(AppError::Unauthorized);
            }
        };

        if !response.has_access {
            record("unauthorized");
            return Err(AppError::Unauthorized);
        }

        let user = response.user.unwrap_or_default();
        let role = match user.user_type.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Identity carries no known role");
                None
            }
        };
        let identity = Identity {
            user_id: user.id,
            username: user.username,
            role,
        };

        if !self.policy.admits(&identity) {
            tracing::warn!(
                user_id = %identity.user_id,
                role = ?identity.role,
                policy = ?self.policy,
                "Permission denied"
            );
            record("forbidden");
            return Err(AppError::PermissionDenied);
        }

        record("admitted");
        Ok(identity)
    }
}

fn record(outcome: &'static str) {
    metrics::counter!("auth_decisions_total", "outcome" => outcome).increment(1);
}

/// Gate middleware; use with `axum::middleware::from_fn_with_state`
pub async fn authorize(
    State(gate): State<Gate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // A missing header is still sent to the auth backend, as an empty credential.
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let identity = gate.check(token).await?;
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Option<Role>) -> Identity {
        Identity {
            user_id: "u1".to_string(),
            username: "ann".to_string(),
            role,
        }
    }

    #[test]
    fn test_authenticated_admits_any_identity() {
        assert!(AccessPolicy::Authenticated.admits(&identity(None)));
        assert!(AccessPolicy::Authenticated.admits(&identity(Some(Role::Customer))));
    }

    #[test]
    fn test_capability_policy() {
        let policy = AccessPolicy::Require(Capability::ManageCatalog);
        assert!(policy.admits(&identity(Some(Role::Admin))));
        assert!(!policy.admits(&identity(Some(Role::Customer))));
        assert!(!policy.admits(&identity(None)));
    }
}
