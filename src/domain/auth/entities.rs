//! Auth Context - Entities

use serde::{Deserialize, Serialize};

use super::PasswordHash;

/// 应用配置文档（与数据集分开存储）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<PasswordHash>,
}

impl AppSettings {
    pub fn with_password(password: &str) -> Self {
        Self {
            password_hash: Some(PasswordHash::of(password)),
        }
    }

    /// 当前生效的密码哈希；未配置时回退到默认密码
    pub fn effective_hash(&self, default_password: &str) -> PasswordHash {
        self.password_hash
            .clone()
            .unwrap_or_else(|| PasswordHash::of(default_password))
    }
}
