//! In-Memory Document Store Implementation
//!
//! 不落盘的文档存储，`storage.in_memory = true` 时使用，也用于测试

use async_trait::async_trait;
use std::sync::RwLock;

use crate::application::ports::{DocumentStorePort, RepositoryError};
use crate::domain::auth::AppSettings;
use crate::domain::board::Dataset;

/// 内存文档存储
#[derive(Default)]
pub struct InMemoryDocumentStore {
    dataset: RwLock<Option<Dataset>>,
    settings: RwLock<Option<AppSettings>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::DatabaseError("lock poisoned".to_string())
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    async fn load_dataset(&self) -> Result<Option<Dataset>, RepositoryError> {
        Ok(self.dataset.read().map_err(poisoned)?.clone())
    }

    async fn save_dataset(&self, dataset: &Dataset) -> Result<(), RepositoryError> {
        *self.dataset.write().map_err(poisoned)? = Some(dataset.clone());
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>, RepositoryError> {
        Ok(self.settings.read().map_err(poisoned)?.clone())
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), RepositoryError> {
        *self.settings.write().map_err(poisoned)? = Some(settings.clone());
        Ok(())
    }
}
