//! Data Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentStorePort;
use crate::application::queries::GetDataset;
use crate::domain::board::Dataset;

/// GetDataset Handler
pub struct GetDatasetHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl GetDatasetHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    /// 从未写入时返回空数据集
    pub async fn handle(&self, _query: GetDataset) -> Result<Dataset, ApplicationError> {
        let dataset = self.store.load_dataset().await?.unwrap_or_default();
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::{handlers::SaveDatasetHandler, SaveDataset};
    use crate::domain::board::seed_dataset;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    #[tokio::test]
    async fn test_empty_store_returns_default() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = GetDatasetHandler::new(store);

        let dataset = handler.handle(GetDataset).await.unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let save = SaveDatasetHandler::new(store.clone());
        let get = GetDatasetHandler::new(store);

        save.handle(SaveDataset {
            dataset: seed_dataset(),
        })
        .await
        .unwrap();

        assert_eq!(get.handle(GetDataset).await.unwrap(), seed_dataset());
    }
}
