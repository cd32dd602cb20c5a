//! 测试用的内存版服务

use axum::Router;
use std::sync::Arc;

use super::server::{HttpServer, ServerConfig};
use super::state::{AppState, AuthSettings, CookieSettings};
use crate::infrastructure::memory::{InMemoryDocumentStore, InMemorySessionManager};

pub fn test_state() -> AppState {
    let settings = AuthSettings {
        cookie: CookieSettings {
            secure: false,
            ..Default::default()
        },
        ..Default::default()
    };
    AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(InMemorySessionManager::new()),
        settings,
    )
}

pub fn test_router() -> Router {
    HttpServer::new(ServerConfig::default(), test_state()).router()
}
