//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/auth-status       GET   是否已登录
//! - /api/login             POST  登录（下发会话 Cookie）
//! - /api/logout            POST  登出
//! - /api/change-password   POST  修改密码（需登录）
//! - /api/data              GET   获取数据集（需登录）
//! - /api/data              POST  覆盖数据集（需登录）
//!
//! 已知路径的其它方法返回 405，未知 /api 路径返回 404

use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_session;
use super::state::AppState;

/// 创建 API 路由（挂载在 /api 下）
pub fn create_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", public(get(handlers::ping)))
        .route("/auth-status", public(get(handlers::auth_status)))
        .route("/login", public(post(handlers::login)))
        .route("/logout", public(post(handlers::logout)))
        .route(
            "/change-password",
            protected(post(handlers::change_password), state),
        )
        .route(
            "/data",
            protected(get(handlers::get_data).post(handlers::save_data), state),
        )
        .fallback(handlers::api_not_found)
}

fn public(route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    route.fallback(handlers::method_not_allowed)
}

/// 会话校验只作用于已注册的方法，其它方法仍返回 405
fn protected(
    route: MethodRouter<Arc<AppState>>,
    state: &Arc<AppState>,
) -> MethodRouter<Arc<AppState>> {
    route
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session))
        .fallback(handlers::method_not_allowed)
}
