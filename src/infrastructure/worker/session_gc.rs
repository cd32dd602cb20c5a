//! Session GC Worker - 定期清理过期会话

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SessionManagerPort;

/// 过期会话清理 Worker
pub struct SessionGcWorker {
    interval: Duration,
    sessions: Arc<dyn SessionManagerPort>,
}

impl SessionGcWorker {
    pub fn new(interval: Duration, sessions: Arc<dyn SessionManagerPort>) -> Self {
        Self { interval, sessions }
    }

    /// 清理一次，返回清理数量
    pub fn purge_once(&self) -> usize {
        let expired = self.sessions.get_expired_sessions();
        let purged = expired
            .iter()
            .filter(|token| self.sessions.close(token).is_ok())
            .count();

        if purged > 0 {
            tracing::info!(
                purged = purged,
                remaining = self.sessions.count(),
                "Expired sessions purged"
            );
        }
        purged
    }

    pub async fn run(self) {
        tracing::info!(interval_secs = self.interval.as_secs(), "SessionGcWorker started");

        let mut ticker = tokio::time::interval(self.interval);
        // 首次 tick 立即返回
        ticker.tick().await;
        loop {
            ticker.tick().await;
            self.purge_once();
        }
    }
}
