//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod client;
pub mod http;
pub mod memory;
pub mod persistence;
pub mod worker;

pub use client::{BoardClient, BoardClientConfig};
pub use memory::{InMemoryDocumentStore, InMemorySessionManager};
pub use persistence::{SledDocumentStore, SledStoreConfig};
pub use worker::{DebouncedSaver, SaveWorker, SaveWorkerConfig, SessionGcWorker};
