//! HTTP Data API Client - 调用链接管理服务的 HTTP 接口
//!
//! 实现 DataApiPort trait，并提供登录、登出、修改密码等会话操作
//!
//! 服务端 API:
//! - GET  /api/auth-status       {authenticated}
//! - POST /api/login             {password}                 -> Set-Cookie
//! - POST /api/logout            -> 过期 Cookie
//! - POST /api/change-password   {oldPassword, newPassword} -> Set-Cookie
//! - GET  /api/data              Dataset JSON
//! - POST /api/data              Dataset JSON

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DataApiError, DataApiPort};
use crate::domain::board::Dataset;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordBody<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthStatusBody {
    authenticated: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP Data API 客户端配置
#[derive(Debug, Clone)]
pub struct HttpDataApiClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 会话 Cookie 名称
    pub cookie_name: String,
}

impl Default for HttpDataApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: 30,
            cookie_name: "linkmanager_session".to_string(),
        }
    }
}

impl HttpDataApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }
}

/// HTTP Data API 客户端
///
/// 会话 Cookie 由 reqwest 的 Cookie Jar 保存，后续请求自动附带
pub struct HttpDataApiClient {
    client: Client,
    config: HttpDataApiClientConfig,
    base_url: Url,
    cookies: Arc<Jar>,
}

impl HttpDataApiClient {
    pub fn new(config: HttpDataApiClientConfig) -> Result<Self, DataApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DataApiError::NetworkError(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(cookies.clone())
            .build()
            .map_err(|e| DataApiError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            base_url,
            cookies,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Jar 中是否存在非空的会话 Cookie
    pub fn has_session(&self) -> bool {
        let Some(header) = self.cookies.cookies(&self.base_url) else {
            return false;
        };
        let Ok(pairs) = header.to_str() else {
            return false;
        };
        pairs.split(';').any(|pair| {
            pair.trim()
                .split_once('=')
                .is_some_and(|(name, value)| name == self.config.cookie_name && !value.is_empty())
        })
    }

    /// 登录，会话 Cookie 由 Jar 记录
    pub async fn login(&self, password: &str) -> Result<(), DataApiError> {
        self.send(self.client.post(self.url("/api/login")).json(&LoginBody { password }))
            .await?;
        tracing::info!(base_url = %self.config.base_url, "Logged in to data API");
        Ok(())
    }

    pub async fn auth_status(&self) -> Result<bool, DataApiError> {
        let response = self
            .send(self.client.get(self.url("/api/auth-status")))
            .await?;
        let body: AuthStatusBody = response
            .json()
            .await
            .map_err(|e| DataApiError::InvalidResponse(e.to_string()))?;
        Ok(body.authenticated)
    }

    /// 修改密码；服务端吊销旧会话并签发新会话
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), DataApiError> {
        let body = ChangePasswordBody {
            old_password,
            new_password,
        };
        self.send(self.client.post(self.url("/api/change-password")).json(&body))
            .await?;
        tracing::info!("Password changed via data API");
        Ok(())
    }

    /// 登出；服务端下发的过期 Cookie 会把会话从 Jar 中移除
    pub async fn logout(&self) -> Result<(), DataApiError> {
        self.send(self.client.post(self.url("/api/logout"))).await?;
        Ok(())
    }

    /// 发送请求，并将非 2xx 响应映射为错误
    async fn send(&self, request: RequestBuilder) -> Result<Response, DataApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DataApiError::Timeout
            } else if e.is_connect() {
                DataApiError::NetworkError(format!("Cannot connect to data API: {}", e))
            } else {
                DataApiError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            let message = Self::error_message(response).await;
            tracing::debug!(error = %message, "Data API rejected credentials");
            // 密码错误同样返回 401，仅会话失效映射为 Unauthorized
            return Err(if message == "Unauthorized" {
                DataApiError::Unauthorized
            } else {
                DataApiError::Rejected {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        Err(DataApiError::Rejected {
            status: status.as_u16(),
            message: Self::error_message(response).await,
        })
    }

    async fn error_message(response: Response) -> String {
        let text = response.text().await.unwrap_or_default();
        serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text)
    }
}

#[async_trait]
impl DataApiPort for HttpDataApiClient {
    async fn fetch_dataset(&self) -> Result<Dataset, DataApiError> {
        let response = self.send(self.client.get(self.url("/api/data"))).await?;
        let dataset: Dataset = response
            .json()
            .await
            .map_err(|e| DataApiError::InvalidResponse(e.to_string()))?;

        tracing::debug!(links = dataset.links.len(), "Dataset fetched");
        Ok(dataset)
    }

    async fn save_dataset(&self, dataset: &Dataset) -> Result<(), DataApiError> {
        self.send(self.client.post(self.url("/api/data")).json(dataset))
            .await?;

        tracing::debug!(links = dataset.links.len(), "Dataset saved to data API");
        Ok(())
    }
}
