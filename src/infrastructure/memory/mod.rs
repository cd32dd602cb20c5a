//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionManager 与内存版 DocumentStore

mod document_store;
mod session_manager;

pub use document_store::InMemoryDocumentStore;
pub use session_manager::InMemorySessionManager;
