//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DocumentStore、SessionManager、DataApi、LocalCache 等）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - auth_gate: 密码与会话校验
//! - board: 客户端看板控制器
//! - error: 应用层错误定义

pub mod auth_gate;
pub mod board;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use auth_gate::AuthGate;
pub use board::{BoardController, LoadSource};
pub use commands::{
    ChangePassword, Login, Logout, SaveDataset,
    // Handlers
    handlers::{ChangePasswordHandler, LoginHandler, LogoutHandler, SaveDatasetHandler},
};

pub use error::ApplicationError;

pub use ports::{
    DataApiError, DataApiPort, DocumentStorePort, LocalCacheError, LocalCachePort,
    RepositoryError, SaveSchedulerPort, Session, SessionError, SessionManagerPort,
};

pub use queries::{
    AuthStatus, GetDataset,
    // Handlers
    handlers::{AuthStatusHandler, GetDatasetHandler},
};
