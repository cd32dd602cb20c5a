//! Auth Queries

/// 查询请求是否已登录
#[derive(Debug, Clone)]
pub struct AuthStatus {
    pub token: Option<String>,
}
