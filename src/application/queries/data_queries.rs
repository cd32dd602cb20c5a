//! Data Queries

/// 获取完整数据集
#[derive(Debug, Clone, Default)]
pub struct GetDataset;
