//! Data Command Handlers

use std::sync::Arc;

use crate::application::commands::SaveDataset;
use crate::application::error::ApplicationError;
use crate::application::ports::DocumentStorePort;

/// SaveDataset Handler - 无条件整体覆盖
pub struct SaveDatasetHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl SaveDatasetHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveDataset) -> Result<(), ApplicationError> {
        self.store.save_dataset(&command.dataset).await?;

        tracing::info!(
            categories = command.dataset.categories.len(),
            links = command.dataset.links.len(),
            "Dataset saved"
        );
        Ok(())
    }
}
