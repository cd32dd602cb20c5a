//! Session Manager Port - 登录会话生命周期管理
//!
//! 会话令牌是随机生成的不透明字符串，与密码哈希无关；
//! 服务端校验、带过期时间、可单个或全部吊销

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,

    #[error("Session already exists")]
    AlreadyExists,

    #[error("Session TTL out of range: {0}s")]
    InvalidTtl(u64),
}

/// 登录会话
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// 过期时间超出可表示范围时返回 InvalidTtl
    pub fn new(ttl_secs: u64) -> Result<Self, SessionError> {
        let now = Utc::now();
        let expires_at = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(SessionError::InvalidTtl(ttl_secs))?;

        Ok(Self {
            token: Uuid::new_v4().simple().to_string(),
            created_at: now,
            expires_at,
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// 剩余有效秒数（用于 Cookie Max-Age）
    pub fn max_age_secs(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

/// Session Manager Port
pub trait SessionManagerPort: Send + Sync {
    /// 登记新会话
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 令牌存在且未过期
    fn is_valid(&self, token: &str) -> bool;

    /// 吊销单个会话
    fn close(&self, token: &str) -> Result<(), SessionError>;

    /// 吊销所有会话，返回吊销数量
    fn close_all(&self) -> usize;

    /// 获取所有过期会话的令牌
    fn get_expired_sessions(&self) -> Vec<String>;

    /// 当前会话数
    fn count(&self) -> usize;
}
