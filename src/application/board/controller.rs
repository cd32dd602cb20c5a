//! Board Controller - 客户端看板控制器
//!
//! 持有唯一的 Board 状态：
//! - 加载：远端 → 本地缓存 → 种子数据
//! - 每次修改同步写本地缓存，并提交快照给延迟保存调度器
//! - 远端保存失败只记录日志，不重试

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::error::ApplicationError;
use crate::application::ports::{DataApiError, DataApiPort, LocalCachePort, SaveSchedulerPort};
use crate::domain::board::{
    export_backup, parse_backup, seed_dataset, BackupFile, Board, BoardEvent, Change, Dataset,
};

/// 数据集来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    LocalCache,
    Seed,
}

/// 看板控制器
pub struct BoardController {
    board: Board,
    api: Arc<dyn DataApiPort>,
    cache: Arc<dyn LocalCachePort>,
    saver: Arc<dyn SaveSchedulerPort>,
}

impl BoardController {
    pub fn new(
        api: Arc<dyn DataApiPort>,
        cache: Arc<dyn LocalCachePort>,
        saver: Arc<dyn SaveSchedulerPort>,
    ) -> Self {
        Self {
            board: Board::default(),
            api,
            cache,
            saver,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 加载数据集
    ///
    /// 未登录（401）直接返回错误，由调用方引导登录；
    /// 其余远端失败（不可达、5xx、响应无法解析）依次回退到本地缓存和种子数据
    pub async fn load(&mut self) -> Result<LoadSource, ApplicationError> {
        match self.api.fetch_dataset().await {
            Ok(dataset) => {
                self.board.replace(dataset);
                self.write_cache().await;
                tracing::info!(
                    categories = self.board.categories().len(),
                    links = self.board.links().len(),
                    "Dataset loaded from API"
                );
                return Ok(LoadSource::Remote);
            }
            Err(DataApiError::Unauthorized) => return Err(ApplicationError::Unauthorized),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    unreachable = e.is_unreachable(),
                    "Data API load failed, falling back"
                );
            }
        }

        match self.cache.load().await {
            Ok(Some(dataset)) => {
                self.board.replace(dataset);
                tracing::info!("Dataset loaded from local cache");
                Ok(LoadSource::LocalCache)
            }
            Ok(None) => {
                self.board.replace(seed_dataset());
                tracing::info!("No local cache, using seed dataset");
                Ok(LoadSource::Seed)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Local cache unreadable, using seed dataset");
                self.board.replace(seed_dataset());
                Ok(LoadSource::Seed)
            }
        }
    }

    /// 应用事件；数据集变化时写缓存并调度保存
    pub async fn dispatch(&mut self, event: BoardEvent) -> Result<Change, ApplicationError> {
        let change = self.board.apply(event)?;
        if change.is_dataset_changed() {
            self.persist().await;
        }
        Ok(change)
    }

    /// 导入备份；格式不符时静默忽略并返回 false
    pub async fn import_backup(&mut self, bytes: &[u8]) -> bool {
        match parse_backup(bytes) {
            Some(dataset) => {
                self.board.replace(dataset);
                self.persist().await;
                tracing::info!(links = self.board.links().len(), "Backup imported");
                true
            }
            None => false,
        }
    }

    pub fn export_backup(&self, date: NaiveDate) -> Result<BackupFile, ApplicationError> {
        export_backup(self.board.dataset(), date)
            .map_err(|e| ApplicationError::internal(format!("Failed to export backup: {}", e)))
    }

    async fn persist(&self) {
        self.write_cache().await;
        self.saver.schedule(self.board.dataset().clone());
    }

    async fn write_cache(&self) {
        if let Err(e) = self.cache.store(self.board.dataset()).await {
            tracing::warn!(error = %e, "Failed to update local cache");
        }
    }

    /// 当前数据集快照
    pub fn snapshot(&self) -> Dataset {
        self.board.dataset().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::LocalCacheError;
    use crate::domain::board::{DragItem, DropTarget, LinkDraft, UNCATEGORIZED};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 可配置失败方式的假远端
    enum FakeApi {
        Serve(Dataset),
        Unreachable,
        Unauthorized,
        ServerError,
        Garbled,
    }

    #[async_trait]
    impl DataApiPort for FakeApi {
        async fn fetch_dataset(&self) -> Result<Dataset, DataApiError> {
            match self {
                FakeApi::Serve(dataset) => Ok(dataset.clone()),
                FakeApi::Unreachable => Err(DataApiError::NetworkError(
                    "connection refused".to_string(),
                )),
                FakeApi::Unauthorized => Err(DataApiError::Unauthorized),
                FakeApi::ServerError => Err(DataApiError::Rejected {
                    status: 500,
                    message: "Internal server error".to_string(),
                }),
                FakeApi::Garbled => Err(DataApiError::InvalidResponse(
                    "expected value at line 1 column 1".to_string(),
                )),
            }
        }

        async fn save_dataset(&self, _dataset: &Dataset) -> Result<(), DataApiError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        stored: Mutex<Option<Dataset>>,
        writes: Mutex<usize>,
    }

    #[async_trait]
    impl LocalCachePort for MemoryCache {
        async fn load(&self) -> Result<Option<Dataset>, LocalCacheError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn store(&self, dataset: &Dataset) -> Result<(), LocalCacheError> {
            *self.stored.lock().unwrap() = Some(dataset.clone());
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSaver {
        scheduled: Mutex<Vec<Dataset>>,
    }

    impl SaveSchedulerPort for RecordingSaver {
        fn schedule(&self, dataset: Dataset) {
            self.scheduled.lock().unwrap().push(dataset);
        }
    }

    fn controller(
        api: FakeApi,
        cache: Arc<MemoryCache>,
        saver: Arc<RecordingSaver>,
    ) -> BoardController {
        BoardController::new(Arc::new(api), cache, saver)
    }

    fn remote(dataset: Dataset) -> FakeApi {
        FakeApi::Serve(dataset)
    }

    fn unreachable() -> FakeApi {
        FakeApi::Unreachable
    }

    #[tokio::test]
    async fn test_load_from_remote_updates_cache() {
        let cache = Arc::new(MemoryCache::default());
        let mut ctl = controller(remote(seed_dataset()), cache.clone(), Arc::default());

        assert_eq!(ctl.load().await.unwrap(), LoadSource::Remote);
        assert_eq!(cache.stored.lock().unwrap().clone(), Some(seed_dataset()));
    }

    #[tokio::test]
    async fn test_load_falls_back_to_cache() {
        let cached = Dataset::default();
        let cache = Arc::new(MemoryCache {
            stored: Mutex::new(Some(cached.clone())),
            writes: Mutex::new(0),
        });
        let mut ctl = controller(unreachable(), cache, Arc::default());

        assert_eq!(ctl.load().await.unwrap(), LoadSource::LocalCache);
        assert_eq!(ctl.snapshot(), cached);
    }

    #[tokio::test]
    async fn test_load_server_error_falls_back_to_cache() {
        let cached = seed_dataset();
        let cache = Arc::new(MemoryCache {
            stored: Mutex::new(Some(cached.clone())),
            writes: Mutex::new(0),
        });
        let mut ctl = controller(FakeApi::ServerError, cache, Arc::default());

        assert_eq!(ctl.load().await.unwrap(), LoadSource::LocalCache);
        assert_eq!(ctl.snapshot(), cached);
    }

    #[tokio::test]
    async fn test_load_invalid_response_falls_back_to_seed() {
        let mut ctl = controller(FakeApi::Garbled, Arc::default(), Arc::default());

        assert_eq!(ctl.load().await.unwrap(), LoadSource::Seed);
        assert_eq!(ctl.snapshot(), seed_dataset());
    }

    #[tokio::test]
    async fn test_load_falls_back_to_seed() {
        let mut ctl = controller(unreachable(), Arc::default(), Arc::default());

        assert_eq!(ctl.load().await.unwrap(), LoadSource::Seed);
        assert_eq!(ctl.snapshot(), seed_dataset());
    }

    #[tokio::test]
    async fn test_load_unauthorized_is_surfaced() {
        let mut ctl = controller(FakeApi::Unauthorized, Arc::default(), Arc::default());

        assert!(matches!(ctl.load().await, Err(ApplicationError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_mutations_write_cache_and_schedule_save() {
        let cache = Arc::new(MemoryCache::default());
        let saver = Arc::new(RecordingSaver::default());
        let mut ctl = controller(remote(seed_dataset()), cache.clone(), saver.clone());
        ctl.load().await.unwrap();
        let writes_after_load = *cache.writes.lock().unwrap();

        // 拖拽开始与悬停不触发持久化
        ctl.dispatch(BoardEvent::DragStart(DragItem::link("seed-rust")))
            .await
            .unwrap();
        assert!(saver.scheduled.lock().unwrap().is_empty());

        let change = ctl
            .dispatch(BoardEvent::Drop(DropTarget::Uncategorized))
            .await
            .unwrap();
        assert_eq!(change, Change::Modified);

        let scheduled = saver.scheduled.lock().unwrap();
        assert_eq!(scheduled.len(), 1);
        let moved = scheduled[0].links.iter().find(|l| l.id == "seed-rust").unwrap();
        assert_eq!(moved.category_id, UNCATEGORIZED);
        assert_eq!(*cache.writes.lock().unwrap(), writes_after_load + 1);
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_persist() {
        let saver = Arc::new(RecordingSaver::default());
        let mut ctl = controller(remote(Dataset::default()), Arc::default(), saver.clone());
        ctl.load().await.unwrap();

        let result = ctl
            .dispatch(BoardEvent::AddLink(LinkDraft::new("", "", "")))
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert!(saver.scheduled.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backup_round_trip() {
        let saver = Arc::new(RecordingSaver::default());
        let mut ctl = controller(remote(seed_dataset()), Arc::default(), saver.clone());
        ctl.load().await.unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let backup = ctl.export_backup(date).unwrap();
        assert_eq!(backup.file_name, "links-backup-2024-06-30.json");

        ctl.dispatch(BoardEvent::DeleteLink {
            id: "seed-rust".to_string(),
        })
        .await
        .unwrap();
        assert_ne!(ctl.snapshot(), seed_dataset());

        assert!(ctl.import_backup(backup.contents.as_bytes()).await);
        assert_eq!(ctl.snapshot(), seed_dataset());
        assert_eq!(saver.scheduled.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_import_is_ignored() {
        let saver = Arc::new(RecordingSaver::default());
        let mut ctl = controller(remote(seed_dataset()), Arc::default(), saver.clone());
        ctl.load().await.unwrap();

        assert!(!ctl.import_backup(br#"{"links": []}"#).await);
        assert_eq!(ctl.snapshot(), seed_dataset());
        assert!(saver.scheduled.lock().unwrap().is_empty());
    }
}
