//! Auth Context - 认证限界上下文
//!
//! 职责:
//! - 密码哈希
//! - 应用配置文档（passwordHash）

mod entities;
mod value_objects;

pub use entities::AppSettings;
pub use value_objects::{PasswordHash, DEFAULT_PASSWORD};
