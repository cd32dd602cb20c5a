//! Worker Layer - Background Task Processing
//!
//! - SaveWorker：延迟合并看板快照并保存到远端
//! - SessionGcWorker：定期清理过期会话

mod save_worker;
mod session_gc;

pub use save_worker::{DebouncedSaver, SaveWorker, SaveWorkerConfig};
pub use session_gc::SessionGcWorker;
