//! File Local Cache - 文件系统本地回退缓存
//!
//! 实现 LocalCachePort trait，以单个 JSON 文件保存数据集

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{LocalCacheError, LocalCachePort};
use crate::domain::board::Dataset;

/// 文件本地缓存
pub struct FileLocalCache {
    path: PathBuf,
}

impl FileLocalCache {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl LocalCachePort for FileLocalCache {
    async fn load(&self) -> Result<Option<Dataset>, LocalCacheError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LocalCacheError::IoError(e.to_string())),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| LocalCacheError::SerializationError(e.to_string()))
    }

    /// 先写临时文件再重命名，避免留下半写入的缓存
    async fn store(&self, dataset: &Dataset) -> Result<(), LocalCacheError> {
        let bytes = serde_json::to_vec(dataset)
            .map_err(|e| LocalCacheError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| LocalCacheError::IoError(e.to_string()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, &bytes)
            .await
            .map_err(|e| LocalCacheError::IoError(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| LocalCacheError::IoError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), size_bytes = bytes.len(), "Local cache updated");
        Ok(())
    }
}
