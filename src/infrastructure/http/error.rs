//! HTTP Error Handling
//!
//! 所有错误响应体统一为 `{"error": message}`

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    InvalidJson,
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    MethodNotAllowed,
    PayloadTooLarge,
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回给客户端的消息；内部错误不暴露细节
    fn message(&self) -> String {
        match self {
            ApiError::InvalidJson => "Invalid JSON".to_string(),
            ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                msg.clone()
            }
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::PayloadTooLarge => "Payload too large".to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), error = %detail, "Internal server error");
            }
            other => {
                tracing::debug!(status = status.as_u16(), error = %other.message(), "Request rejected");
            }
        }

        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::MissingField(msg) => ApiError::BadRequest(msg.to_string()),
            ApplicationError::WrongPassword => ApiError::Unauthorized(e.to_string()),
            ApplicationError::OldPasswordIncorrect => ApiError::BadRequest(e.to_string()),
            ApplicationError::Unauthorized => ApiError::Unauthorized(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::NotFound(msg) => ApiError::NotFound(msg),
            ApplicationError::RepositoryError(msg)
            | ApplicationError::ExternalServiceError(msg)
            | ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

/// 请求体读取失败：超出大小上限为 413，其余按无效 JSON 处理
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            tracing::debug!(error = %rejection.body_text(), "Failed to read request body");
            ApiError::InvalidJson
        }
    }
}
