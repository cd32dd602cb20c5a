//! 应用层 - 客户端看板
//!
//! 排序引擎的唯一状态持有者，负责加载回退与持久化调度

mod controller;

pub use controller::{BoardController, LoadSource};
