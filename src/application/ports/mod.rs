//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod data_api;
mod document_store;
mod local_cache;
mod save_scheduler;
mod session_manager;

pub use data_api::{DataApiError, DataApiPort};
pub use document_store::{DocumentStorePort, RepositoryError};
pub use local_cache::{LocalCacheError, LocalCachePort};
pub use save_scheduler::SaveSchedulerPort;
pub use session_manager::{Session, SessionError, SessionManagerPort};
