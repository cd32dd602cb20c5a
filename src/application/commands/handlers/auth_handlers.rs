//! Auth Command Handlers

use std::sync::Arc;

use crate::application::auth_gate::AuthGate;
use crate::application::commands::{ChangePassword, Login, Logout};
use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentStorePort, Session};
use crate::domain::auth::AppSettings;

// ============================================================================
// Login
// ============================================================================

/// Login Handler
pub struct LoginHandler {
    gate: Arc<AuthGate>,
}

impl LoginHandler {
    pub fn new(gate: Arc<AuthGate>) -> Self {
        Self { gate }
    }

    /// 密码正确时签发新会话
    pub async fn handle(&self, command: Login) -> Result<Session, ApplicationError> {
        if command.password.is_empty() {
            return Err(ApplicationError::MissingField("Password required"));
        }

        if !self.gate.authenticate(&command.password).await? {
            tracing::warn!("Login rejected: wrong password");
            return Err(ApplicationError::WrongPassword);
        }

        let session = self.gate.open_session()?;
        tracing::info!(expires_at = %session.expires_at, "Login succeeded");
        Ok(session)
    }
}

// ============================================================================
// ChangePassword
// ============================================================================

/// ChangePassword Handler
pub struct ChangePasswordHandler {
    gate: Arc<AuthGate>,
    store: Arc<dyn DocumentStorePort>,
}

impl ChangePasswordHandler {
    pub fn new(gate: Arc<AuthGate>, store: Arc<dyn DocumentStorePort>) -> Self {
        Self { gate, store }
    }

    /// 保存新哈希，吊销所有旧会话，并为当前用户签发新会话
    pub async fn handle(&self, command: ChangePassword) -> Result<Session, ApplicationError> {
        if command.old_password.is_empty() || command.new_password.is_empty() {
            return Err(ApplicationError::MissingField(
                "Old and new password required",
            ));
        }

        if !self.gate.authenticate(&command.old_password).await? {
            tracing::warn!("Password change rejected: old password incorrect");
            return Err(ApplicationError::OldPasswordIncorrect);
        }

        self.store
            .save_settings(&AppSettings::with_password(&command.new_password))
            .await?;

        let revoked = self.gate.sessions().close_all();
        let session = self.gate.open_session()?;

        tracing::info!(revoked_sessions = revoked, "Password changed");
        Ok(session)
    }
}

// ============================================================================
// Logout
// ============================================================================

/// Logout Handler
pub struct LogoutHandler {
    gate: Arc<AuthGate>,
}

impl LogoutHandler {
    pub fn new(gate: Arc<AuthGate>) -> Self {
        Self { gate }
    }

    /// 吊销当前会话；未登录时同样视为成功
    pub async fn handle(&self, command: Logout) -> Result<(), ApplicationError> {
        if let Some(token) = command.token {
            if self.gate.sessions().close(&token).is_ok() {
                tracing::info!("Session closed by logout");
            }
        }
        Ok(())
    }
}
