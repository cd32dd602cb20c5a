//! Board Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("分类不存在: {0}")]
    CategoryNotFound(String),

    #[error("链接不存在: {0}")]
    LinkNotFound(String),

    #[error("子链接不存在: {0}")]
    SubLinkNotFound(String),

    #[error("无效的输入: {0}")]
    InvalidInput(String),
}
