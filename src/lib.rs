//! LinkManager - 个人链接收藏与排序
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Board Context: 分类、链接、拖拽排序、筛选、备份
//! - Auth Context: 密码哈希与应用配置
//!
//! 应用层 (application/):
//! - Ports: 端口定义（DocumentStore, SessionManager, DataApi, LocalCache, SaveScheduler）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//! - AuthGate / BoardController
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态文件
//! - Memory: SessionManager 与内存 DocumentStore
//! - Persistence: Sled 文档存储
//! - Adapters: Data API HTTP 客户端、本地缓存文件
//! - Worker: 延迟保存、会话清理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
