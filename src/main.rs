//! LinkManager 服务端
//!
//! 组装 Sled 文档存储、内存会话与 HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use linkmanager::application::DocumentStorePort;
use linkmanager::config::{load_config, print_config, LogConfig};
use linkmanager::infrastructure::http::{
    AppState, AuthSettings, CookieSettings, HttpServer, ServerConfig,
};
use linkmanager::infrastructure::memory::{InMemoryDocumentStore, InMemorySessionManager};
use linkmanager::infrastructure::persistence::{SledDocumentStore, SledStoreConfig};
use linkmanager::infrastructure::worker::SessionGcWorker;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},linkmanager={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "LinkManager starting");
    print_config(&config);

    // 文档存储
    let store: Arc<dyn DocumentStorePort> = if config.storage.in_memory {
        tracing::warn!("Using in-memory storage, data is lost on restart");
        Arc::new(InMemoryDocumentStore::new())
    } else {
        if let Some(parent) = config.storage.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let store_config = SledStoreConfig {
            db_path: config.storage.path.to_string_lossy().into_owned(),
            dataset_key: config.storage.dataset_key.clone(),
            settings_key: config.storage.settings_key.clone(),
        };
        Arc::new(SledDocumentStore::new(&store_config)?)
    };

    // 内存会话，定期清理过期会话
    let sessions = Arc::new(InMemorySessionManager::new());
    let gc = SessionGcWorker::new(
        Duration::from_secs(config.auth.session_gc_interval_secs),
        sessions.clone(),
    );
    tokio::spawn(gc.run());

    let auth = AuthSettings {
        default_password: config.auth.default_password.clone(),
        session_ttl_secs: config.auth.session_ttl_secs,
        cookie: CookieSettings {
            name: config.auth.cookie_name.clone(),
            secure: config.auth.secure_cookie,
        },
    };
    let state = AppState::new(store, sessions, auth);

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    if let Some(dir) = config.server.static_dir() {
        server_config = server_config.with_static_dir(dir);
    }
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
