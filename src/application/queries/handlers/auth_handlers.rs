//! Auth Query Handlers

use std::sync::Arc;

use crate::application::auth_gate::AuthGate;
use crate::application::queries::AuthStatus;

/// AuthStatus Handler
pub struct AuthStatusHandler {
    gate: Arc<AuthGate>,
}

impl AuthStatusHandler {
    pub fn new(gate: Arc<AuthGate>) -> Self {
        Self { gate }
    }

    pub fn handle(&self, query: AuthStatus) -> bool {
        self.gate.is_request_authenticated(query.token.as_deref())
    }
}
