use serde::Serialize;

use crate::envelope::{Envelope, Reply};

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Liveness only; backends are not probed
pub async fn health_check() -> Reply<Health> {
    Envelope::ok(Health {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
