//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Board Context: 分类与链接看板（排序引擎）
//! - Auth Context: 密码与应用配置

pub mod auth;
pub mod board;
