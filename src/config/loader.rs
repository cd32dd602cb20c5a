//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 会话有效期上限（10 年）
const MAX_SESSION_TTL_SECS: u64 = 10 * 365 * 24 * 3600;

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `LINKMANAGER_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `LINKMANAGER_SERVER__PORT=8080`
/// - `LINKMANAGER_STORAGE__PATH=/data/links.sled`
/// - `LINKMANAGER_AUTH__SECURE_COOKIE=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级），其余字段由 serde default 补齐
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("storage.path", "data/linkmanager.sled")?
        .set_default("auth.session_ttl_secs", 30 * 24 * 3600)?
        .set_default("client.debounce_ms", 800)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("LINKMANAGER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if !config.storage.in_memory && config.storage.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage path cannot be empty".to_string(),
        ));
    }

    if config.storage.dataset_key.is_empty()
        || config.storage.settings_key.is_empty()
        || config.storage.dataset_key == config.storage.settings_key
    {
        return Err(ConfigError::ValidationError(
            "Storage keys must be non-empty and distinct".to_string(),
        ));
    }

    if config.auth.default_password.is_empty() {
        return Err(ConfigError::ValidationError(
            "Default password cannot be empty".to_string(),
        ));
    }

    if config.auth.cookie_name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Cookie name cannot be empty".to_string(),
        ));
    }

    if config.auth.session_ttl_secs == 0 || config.auth.session_gc_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session TTL and GC interval must be positive".to_string(),
        ));
    }

    if config.auth.session_ttl_secs > MAX_SESSION_TTL_SECS {
        return Err(ConfigError::ValidationError(format!(
            "Session TTL cannot exceed {}s",
            MAX_SESSION_TTL_SECS
        )));
    }

    if config.client.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Client base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出默认密码
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Bytes: {}", config.server.max_body_bytes);
    tracing::info!("Static Files: {:?}", config.server.static_dir());
    if config.storage.in_memory {
        tracing::info!("Storage: in-memory");
    } else {
        tracing::info!("Storage: {:?}", config.storage.path);
    }
    tracing::info!(
        "Storage Keys: dataset={}, settings={}",
        config.storage.dataset_key,
        config.storage.settings_key
    );
    tracing::info!("Session Cookie: {}", config.auth.cookie_name);
    tracing::info!("Session TTL: {}s", config.auth.session_ttl_secs);
    tracing::info!("Secure Cookie: {}", config.auth.secure_cookie);
    tracing::info!("Session GC Interval: {}s", config.auth.session_gc_interval_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
