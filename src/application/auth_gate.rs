//! Auth Gate - 密码校验与会话校验
//!
//! 登录与修改密码处理器、HTTP 鉴权中间件共享的认证原语

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentStorePort, Session, SessionManagerPort};
use crate::domain::auth::PasswordHash;

/// 认证网关
pub struct AuthGate {
    store: Arc<dyn DocumentStorePort>,
    sessions: Arc<dyn SessionManagerPort>,
    default_password: String,
    session_ttl_secs: u64,
}

impl AuthGate {
    pub fn new(
        store: Arc<dyn DocumentStorePort>,
        sessions: Arc<dyn SessionManagerPort>,
        default_password: impl Into<String>,
        session_ttl_secs: u64,
    ) -> Self {
        Self {
            store,
            sessions,
            default_password: default_password.into(),
            session_ttl_secs,
        }
    }

    /// 当前生效的密码哈希；未配置时为默认密码的哈希
    pub async fn current_password_hash(&self) -> Result<PasswordHash, ApplicationError> {
        let settings = self.store.load_settings().await?.unwrap_or_default();
        Ok(settings.effective_hash(&self.default_password))
    }

    /// hash(password) == 当前哈希
    pub async fn authenticate(&self, password: &str) -> Result<bool, ApplicationError> {
        Ok(self.current_password_hash().await?.verify(password))
    }

    /// Cookie 中的会话令牌是否有效
    pub fn is_request_authenticated(&self, token: Option<&str>) -> bool {
        token.map(|t| self.sessions.is_valid(t)).unwrap_or(false)
    }

    /// 签发新会话
    pub fn open_session(&self) -> Result<Session, ApplicationError> {
        let session = Session::new(self.session_ttl_secs)
            .map_err(|e| ApplicationError::internal(e.to_string()))?;
        self.sessions
            .create(session.clone())
            .map_err(|e| ApplicationError::internal(e.to_string()))?;
        Ok(session)
    }

    pub fn sessions(&self) -> &Arc<dyn SessionManagerPort> {
        &self.sessions
    }
}
