//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::board::BoardError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 必填字段缺失或为空
    #[error("{0}")]
    MissingField(&'static str),

    /// 登录密码错误
    #[error("Wrong password")]
    WrongPassword,

    /// 修改密码时旧密码错误
    #[error("Old password is incorrect")]
    OldPasswordIncorrect,

    /// 未登录或会话失效
    #[error("Unauthorized")]
    Unauthorized,

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 资源未找到
    #[error("Not found: {0}")]
    NotFound(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<crate::application::ports::DataApiError> for ApplicationError {
    fn from(err: crate::application::ports::DataApiError) -> Self {
        match err {
            crate::application::ports::DataApiError::Unauthorized => Self::Unauthorized,
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<BoardError> for ApplicationError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::CategoryNotFound(_)
            | BoardError::LinkNotFound(_)
            | BoardError::SubLinkNotFound(_) => Self::NotFound(err.to_string()),
            BoardError::InvalidInput(msg) => Self::ValidationError(msg),
        }
    }
}
