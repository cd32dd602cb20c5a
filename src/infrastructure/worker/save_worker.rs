//! Save Worker - 延迟合并的远端保存
//!
//! 看板每次修改都提交一份快照；Worker 等待静默期后只保存最新一份

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::application::ports::{DataApiPort, SaveSchedulerPort};
use crate::domain::board::Dataset;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct SaveWorkerConfig {
    /// 最后一次提交后的静默期
    pub debounce: Duration,
}

impl Default for SaveWorkerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(800),
        }
    }
}

/// 保存调度器，SaveSchedulerPort 的 channel 实现
#[derive(Clone)]
pub struct DebouncedSaver {
    sender: mpsc::UnboundedSender<Dataset>,
}

impl DebouncedSaver {
    /// 创建调度器与对应的 Worker
    pub fn channel(config: SaveWorkerConfig, api: Arc<dyn DataApiPort>) -> (Self, SaveWorker) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self { sender },
            SaveWorker {
                config,
                receiver,
                api,
            },
        )
    }
}

impl SaveSchedulerPort for DebouncedSaver {
    fn schedule(&self, dataset: Dataset) {
        if self.sender.send(dataset).is_err() {
            tracing::warn!("Save worker stopped, snapshot dropped");
        }
    }
}

/// 保存 Worker
pub struct SaveWorker {
    config: SaveWorkerConfig,
    receiver: mpsc::UnboundedReceiver<Dataset>,
    api: Arc<dyn DataApiPort>,
}

impl SaveWorker {
    /// 启动 Worker，所有调度器关闭后退出
    pub async fn run(mut self) {
        tracing::info!(
            debounce_ms = self.config.debounce.as_millis() as u64,
            "SaveWorker started"
        );

        while let Some(mut latest) = self.receiver.recv().await {
            let mut coalesced = 0usize;
            loop {
                match timeout(self.config.debounce, self.receiver.recv()).await {
                    Ok(Some(newer)) => {
                        latest = newer;
                        coalesced += 1;
                    }
                    // channel 关闭：立即保存待写快照
                    Ok(None) => break,
                    Err(_) => break,
                }
            }

            self.save(&latest, coalesced).await;
        }

        tracing::info!("SaveWorker stopped");
    }

    async fn save(&self, dataset: &Dataset, coalesced: usize) {
        match self.api.save_dataset(dataset).await {
            Ok(()) => tracing::debug!(
                links = dataset.links.len(),
                coalesced = coalesced,
                "Snapshot saved"
            ),
            Err(e) => tracing::warn!(error = %e, "Failed to save snapshot, dropping it"),
        }
    }
}
