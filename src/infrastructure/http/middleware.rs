//! HTTP Middleware
//!
//! - 请求日志：4xx 记 warn，5xx 记 error
//! - 会话校验：受保护路由要求有效会话 Cookie

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;

/// HTTP 状态码日志中间件
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 会话校验中间件，无效时返回 401 `{"error":"Unauthorized"}`
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let token = state.session_token(&jar);
    if !state.gate.is_request_authenticated(token.as_deref()) {
        return ApiError::Unauthorized("Unauthorized".to_string()).into_response();
    }

    next.run(request).await
}
