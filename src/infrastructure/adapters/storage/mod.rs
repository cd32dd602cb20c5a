//! Storage Adapter - 客户端本地缓存

mod file_local_cache;

pub use file_local_cache::FileLocalCache;
