//! Auth Commands

/// 登录命令
#[derive(Debug, Clone)]
pub struct Login {
    pub password: String,
}

/// 修改密码命令
#[derive(Debug, Clone)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// 登出命令
#[derive(Debug, Clone)]
pub struct Logout {
    pub token: Option<String>,
}
