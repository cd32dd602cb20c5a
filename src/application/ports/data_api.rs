//! Data API Port - 客户端访问远端数据接口
//!
//! 看板控制器通过该端口加载与保存数据集，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::board::Dataset;

/// Data API 错误
#[derive(Debug, Error)]
pub enum DataApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl DataApiError {
    /// 远端不可达（可回退到本地缓存）
    pub fn is_unreachable(&self) -> bool {
        matches!(self, DataApiError::NetworkError(_) | DataApiError::Timeout)
    }
}

/// Data API Port
#[async_trait]
pub trait DataApiPort: Send + Sync {
    /// 获取完整数据集
    async fn fetch_dataset(&self) -> Result<Dataset, DataApiError>;

    /// 整体覆盖远端数据集
    async fn save_dataset(&self, dataset: &Dataset) -> Result<(), DataApiError>;
}
