//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod auth_queries;
mod data_queries;

pub mod handlers;

pub use auth_queries::*;
pub use data_queries::*;
