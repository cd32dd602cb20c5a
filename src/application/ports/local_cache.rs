//! Local Cache Port - 客户端本地回退缓存
//!
//! 每次修改都同步写入，远端加载失败时读取

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::board::Dataset;

/// Local Cache 错误
#[derive(Debug, Error)]
pub enum LocalCacheError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Local Cache Port
#[async_trait]
pub trait LocalCachePort: Send + Sync {
    /// 读取缓存；不存在时返回 None
    async fn load(&self) -> Result<Option<Dataset>, LocalCacheError>;

    /// 覆盖缓存
    async fn store(&self, dataset: &Dataset) -> Result<(), LocalCacheError>;
}
