//! In-Memory Session Manager Implementation

use chrono::Utc;
use dashmap::DashMap;

use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 内存会话管理器
///
/// 服务重启后所有会话失效，需要重新登录
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let token = session.token.clone();
        if self.sessions.contains_key(&token) {
            return Err(SessionError::AlreadyExists);
        }
        tracing::debug!(expires_at = %session.expires_at, "Session created");
        self.sessions.insert(token.clone(), session);
        Ok(token)
    }

    fn is_valid(&self, token: &str) -> bool {
        let expired = match self.sessions.get(token) {
            Some(session) => session.is_expired_at(Utc::now()),
            None => return false,
        };

        if expired {
            self.sessions.remove(token);
            tracing::debug!("Expired session rejected");
            return false;
        }
        true
    }

    fn close(&self, token: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(token)
            .map(|_| {
                tracing::debug!("Session closed");
            })
            .ok_or(SessionError::NotFound)
    }

    fn close_all(&self) -> usize {
        let count = self.sessions.len();
        self.sessions.clear();
        count
    }

    fn get_expired_sessions(&self) -> Vec<String> {
        let now = Utc::now();
        self.sessions
            .iter()
            .filter(|entry| entry.is_expired_at(now))
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}
