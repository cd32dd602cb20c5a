//! Fallback Handlers

use crate::infrastructure::http::error::ApiError;

/// 已知 API 路径的其它方法
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// 未知 API 路径
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
