//! Document Store Port - 键值文档存储
//!
//! 存储中只有两份文档：数据集与应用配置，均整体读写（后写者胜）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::auth::AppSettings;
use crate::domain::board::Dataset;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Document Store Port
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// 读取数据集；从未写入时返回 None
    async fn load_dataset(&self) -> Result<Option<Dataset>, RepositoryError>;

    /// 整体覆盖数据集
    async fn save_dataset(&self, dataset: &Dataset) -> Result<(), RepositoryError>;

    /// 读取应用配置；从未写入时返回 None
    async fn load_settings(&self) -> Result<Option<AppSettings>, RepositoryError>;

    /// 整体覆盖应用配置
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), RepositoryError>;
}
