//! Auth Context - Value Objects

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 未配置密码时使用的内置默认密码
pub const DEFAULT_PASSWORD: &str = "linkmanager";

/// 密码哈希（SHA-256，小写十六进制）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    /// 计算明文密码的哈希
    pub fn of(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        Self(hex::encode(digest))
    }

    /// 包装已存储的哈希值
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 恒定时间比较
    pub fn matches(&self, other: &PasswordHash) -> bool {
        let a = self.0.as_bytes();
        let b = other.0.as_bytes();
        if a.len() != b.len() {
            return false;
        }
        a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
    }

    pub fn verify(&self, password: &str) -> bool {
        self.matches(&PasswordHash::of(password))
    }
}

impl From<String> for PasswordHash {
    fn from(hash: String) -> Self {
        Self::from_stored(hash)
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> Self {
        hash.0
    }
}

impl std::fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
