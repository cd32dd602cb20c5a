//! Application State
//!
//! 包含所有 Command/Query Handlers 与会话 Cookie 设置

use std::sync::Arc;

use crate::application::{
    AuthGate,
    // Command handlers
    ChangePasswordHandler, LoginHandler, LogoutHandler, SaveDatasetHandler,
    // Query handlers
    AuthStatusHandler, GetDatasetHandler,
    // Ports
    DocumentStorePort, SessionManagerPort,
};

/// 会话 Cookie 设置
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: "linkmanager_session".to_string(),
            secure: true,
        }
    }
}

/// 认证相关设置
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub default_password: String,
    pub session_ttl_secs: u64,
    pub cookie: CookieSettings,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            default_password: crate::domain::auth::DEFAULT_PASSWORD.to_string(),
            session_ttl_secs: 30 * 24 * 3600,
            cookie: CookieSettings::default(),
        }
    }
}

/// 应用状态
pub struct AppState {
    pub gate: Arc<AuthGate>,
    pub cookie: CookieSettings,

    // ========== Command Handlers ==========
    pub login_handler: LoginHandler,
    pub logout_handler: LogoutHandler,
    pub change_password_handler: ChangePasswordHandler,
    pub save_dataset_handler: SaveDatasetHandler,

    // ========== Query Handlers ==========
    pub auth_status_handler: AuthStatusHandler,
    pub get_dataset_handler: GetDatasetHandler,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStorePort>,
        sessions: Arc<dyn SessionManagerPort>,
        settings: AuthSettings,
    ) -> Self {
        let gate = Arc::new(AuthGate::new(
            store.clone(),
            sessions,
            settings.default_password,
            settings.session_ttl_secs,
        ));

        Self {
            gate: gate.clone(),
            cookie: settings.cookie,

            // Command handlers
            login_handler: LoginHandler::new(gate.clone()),
            logout_handler: LogoutHandler::new(gate.clone()),
            change_password_handler: ChangePasswordHandler::new(gate.clone(), store.clone()),
            save_dataset_handler: SaveDatasetHandler::new(store.clone()),

            // Query handlers
            auth_status_handler: AuthStatusHandler::new(gate),
            get_dataset_handler: GetDatasetHandler::new(store),
        }
    }

    /// 从 Cookie 中取出会话令牌
    pub fn session_token(&self, jar: &axum_extra::extract::CookieJar) -> Option<String> {
        jar.get(&self.cookie.name).map(|c| c.value().to_string())
    }
}
