use crate::backend::BackendClients;

/// Request-shared state; the client set is read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub backends: BackendClients,
}

impl AppState {
    pub fn new(backends: BackendClients) -> Self {
        Self { backends }
    }
}
