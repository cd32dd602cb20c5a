//! Save Scheduler Port - 延迟保存调度
//!
//! 控制器每次修改后提交最新快照，实现方负责防抖合并后写入远端

use crate::domain::board::Dataset;

/// Save Scheduler Port
pub trait SaveSchedulerPort: Send + Sync {
    /// 提交最新数据集快照，立即返回
    fn schedule(&self, dataset: Dataset);
}
