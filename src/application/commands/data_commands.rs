//! Data Commands

use crate::domain::board::Dataset;

/// 整体覆盖数据集命令
#[derive(Debug, Clone)]
pub struct SaveDataset {
    pub dataset: Dataset,
}
