//! Data API Adapter - 链接管理服务 HTTP 客户端

mod http_data_api_client;

pub use http_data_api_client::{HttpDataApiClient, HttpDataApiClientConfig};
