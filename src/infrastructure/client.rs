//! Board Client - 客户端组装
//!
//! 将 HTTP Data API 客户端、本地缓存与延迟保存 Worker 组装为一个看板控制器

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::application::ports::DataApiError;
use crate::application::BoardController;
use crate::config::{AuthConfig, ClientConfig};

use super::adapters::{FileLocalCache, HttpDataApiClient, HttpDataApiClientConfig};
use super::worker::{DebouncedSaver, SaveWorkerConfig};

/// 客户端组装配置
#[derive(Debug, Clone)]
pub struct BoardClientConfig {
    pub api: HttpDataApiClientConfig,
    pub cache_path: PathBuf,
    pub debounce: Duration,
}

impl BoardClientConfig {
    pub fn from_config(client: &ClientConfig, auth: &AuthConfig) -> Self {
        Self {
            api: HttpDataApiClientConfig::new(&client.base_url)
                .with_timeout(client.timeout_secs)
                .with_cookie_name(&auth.cookie_name),
            cache_path: client.cache_path.clone(),
            debounce: Duration::from_millis(client.debounce_ms),
        }
    }
}

/// 已组装的客户端
pub struct BoardClient {
    pub api: Arc<HttpDataApiClient>,
    pub controller: BoardController,
    save_worker: JoinHandle<()>,
}

impl BoardClient {
    /// 组装并启动保存 Worker，需在 tokio 运行时内调用
    pub fn connect(config: BoardClientConfig) -> Result<Self, DataApiError> {
        let api = Arc::new(HttpDataApiClient::new(config.api)?);
        let cache = Arc::new(FileLocalCache::new(&config.cache_path));
        let (saver, worker) = DebouncedSaver::channel(
            SaveWorkerConfig {
                debounce: config.debounce,
            },
            api.clone(),
        );

        Ok(Self {
            controller: BoardController::new(api.clone(), cache, Arc::new(saver)),
            api,
            save_worker: tokio::spawn(worker.run()),
        })
    }

    /// 关闭控制器并等待待保存快照写出
    pub async fn shutdown(self) {
        let Self {
            controller,
            save_worker,
            ..
        } = self;
        drop(controller);

        if let Err(e) = save_worker.await {
            tracing::error!(error = %e, "Save worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{DataApiPort, LoadSource};
    use crate::domain::board::{seed_dataset, BoardEvent, DragItem, DropTarget};
    use crate::infrastructure::http::test_support::test_router;
    use tokio::net::TcpListener;

    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, test_router()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(base_url: String, cache_path: PathBuf) -> BoardClientConfig {
        BoardClientConfig {
            api: HttpDataApiClientConfig::new(base_url).with_timeout(5),
            cache_path,
            debounce: Duration::from_millis(20),
        }
    }

    #[test]
    fn test_from_app_config() {
        let app = crate::config::AppConfig::default();
        let config = BoardClientConfig::from_config(&app.client, &app.auth);

        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.cookie_name, "linkmanager_session");
        assert_eq!(config.debounce, Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_edit_is_saved_remotely() {
        let base_url = spawn_server().await;
        let dir = tempfile::tempdir().unwrap();

        let mut client =
            BoardClient::connect(config(base_url.clone(), dir.path().join("cache.json"))).unwrap();
        client.api.login("linkmanager").await.unwrap();
        client.api.save_dataset(&seed_dataset()).await.unwrap();

        assert_eq!(client.controller.load().await.unwrap(), LoadSource::Remote);
        client
            .controller
            .dispatch(BoardEvent::DragStart(DragItem::link("seed-rust")))
            .await
            .unwrap();
        client
            .controller
            .dispatch(BoardEvent::Drop(DropTarget::Uncategorized))
            .await
            .unwrap();
        let expected = client.controller.snapshot();

        let api = client.api.clone();
        client.shutdown().await;

        assert_eq!(api.fetch_dataset().await.unwrap(), expected);
        let cached: crate::domain::board::Dataset =
            serde_json::from_slice(&std::fs::read(dir.path().join("cache.json")).unwrap())
                .unwrap();
        assert_eq!(cached, expected);
    }

    #[tokio::test]
    async fn test_offline_falls_back_to_seed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let dir = tempfile::tempdir().unwrap();

        let mut client = BoardClient::connect(config(
            format!("http://{}", addr),
            dir.path().join("cache.json"),
        ))
        .unwrap();

        assert_eq!(client.controller.load().await.unwrap(), LoadSource::Seed);
        assert_eq!(client.controller.snapshot(), seed_dataset());
        client.shutdown().await;
    }
}
