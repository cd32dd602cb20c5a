//! Sled-based Document Store Implementation
//!
//! 两个键各保存一份 JSON 文档：数据集与应用配置

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use std::path::Path;

use crate::application::ports::{DocumentStorePort, RepositoryError};
use crate::domain::auth::AppSettings;
use crate::domain::board::Dataset;

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
    /// 数据集文档的键
    pub dataset_key: String,
    /// 应用配置文档的键
    pub settings_key: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/linkmanager.sled".to_string(),
            dataset_key: "data".to_string(),
            settings_key: "config".to_string(),
        }
    }
}

/// Sled 文档存储
pub struct SledDocumentStore {
    db: Db,
    dataset_key: String,
    settings_key: String,
}

impl SledDocumentStore {
    /// 打开（或创建）数据库
    pub fn new(config: &SledStoreConfig) -> Result<Self, RepositoryError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            has_dataset = db.contains_key(&config.dataset_key).unwrap_or(false),
            "SledDocumentStore initialized"
        );

        Ok(Self {
            db,
            dataset_key: config.dataset_key.clone(),
            settings_key: config.settings_key.clone(),
        })
    }

    /// 使用默认键打开指定路径
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
            ..Default::default()
        };
        Self::new(&config)
    }

    fn read_document<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RepositoryError> {
        match self.db.get(key) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| RepositoryError::SerializationError(e.to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(RepositoryError::DatabaseError(e.to_string())),
        }
    }

    async fn write_document<T: Serialize + Sync>(
        &self,
        key: &str,
        document: &T,
    ) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec(document)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let size = bytes.len();

        self.db
            .insert(key, bytes)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        self.db
            .flush_async()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::debug!(key = %key, size_bytes = size, "Document written");
        Ok(())
    }
}

#[async_trait]
impl DocumentStorePort for SledDocumentStore {
    async fn load_dataset(&self) -> Result<Option<Dataset>, RepositoryError> {
        self.read_document(&self.dataset_key)
    }

    async fn save_dataset(&self, dataset: &Dataset) -> Result<(), RepositoryError> {
        self.write_document(&self.dataset_key, dataset).await
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>, RepositoryError> {
        self.read_document(&self.settings_key)
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), RepositoryError> {
        self.write_document(&self.settings_key, settings).await
    }
}
