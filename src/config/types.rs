//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 认证配置
    #[serde(default)]
    pub auth: AuthConfig,

    /// 客户端配置
    #[serde(default)]
    pub client: ClientConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节），整份数据集随 POST /api/data 一次上传
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default)]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 启用时返回静态文件目录
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.static_files
            .enabled
            .then(|| self.static_files.dir.clone())
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Sled 数据库路径
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    /// 数据集文档的 key
    #[serde(default = "default_dataset_key")]
    pub dataset_key: String,

    /// 配置文档（密码哈希）的 key
    #[serde(default = "default_settings_key")]
    pub settings_key: String,

    /// 使用内存存储（重启后数据丢失）
    #[serde(default)]
    pub in_memory: bool,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/linkmanager.sled")
}

fn default_dataset_key() -> String {
    "data".to_string()
}

fn default_settings_key() -> String {
    "config".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            dataset_key: default_dataset_key(),
            settings_key: default_settings_key(),
            in_memory: false,
        }
    }
}

/// 认证配置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// 未设置密码时使用的默认密码
    #[serde(default = "default_password")]
    pub default_password: String,

    /// 会话 Cookie 名称
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// 会话有效期（秒）
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Cookie 是否带 Secure 属性（本地 HTTP 调试时关闭）
    #[serde(default = "default_secure_cookie")]
    pub secure_cookie: bool,

    /// 过期会话清理间隔（秒）
    #[serde(default = "default_session_gc_interval")]
    pub session_gc_interval_secs: u64,
}

fn default_password() -> String {
    crate::domain::auth::DEFAULT_PASSWORD.to_string()
}

fn default_cookie_name() -> String {
    "linkmanager_session".to_string()
}

fn default_session_ttl() -> u64 {
    30 * 24 * 3600 // 30 天
}

fn default_secure_cookie() -> bool {
    true
}

fn default_session_gc_interval() -> u64 {
    3600 // 1 小时
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_password: default_password(),
            cookie_name: default_cookie_name(),
            session_ttl_secs: default_session_ttl(),
            secure_cookie: default_secure_cookie(),
            session_gc_interval_secs: default_session_gc_interval(),
        }
    }
}

/// 客户端（看板控制器）配置
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Data API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 保存防抖间隔（毫秒）
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// 本地缓存文件路径
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_debounce_ms() -> u64 {
    800
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("data/links-cache.json")
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
            cache_path: default_cache_path(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
