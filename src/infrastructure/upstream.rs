use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 上游请求的统一错误，调用方不会看到底层传输错误类型
#[derive(Debug, Clone, thiserror::Error)]
#[error("Request failed: {0}")]
pub struct UpstreamError(String);

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// 发出单次 GET 请求并解析 JSON
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError>;
}

/// 基于 reqwest 的传输实现
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        let response = self.client.get(url).send().await.map_err(describe)?;
        let response = response.error_for_status().map_err(describe)?;
        response.json::<Value>().await.map_err(describe)
    }
}

fn describe(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::new("upstream timed out")
    } else if let Some(status) = err.status() {
        UpstreamError::new(format!("upstream responded with status {}", status))
    } else if err.is_decode() {
        UpstreamError::new(format!("invalid response body: {}", err))
    } else {
        UpstreamError::new(err.to_string())
    }
}

/// 上游客户端：在传输之外再套一层超时，单次尝试，不重试
#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(transport: Arc<dyn Transport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub async fn fetch(&self, url: &str) -> Result<Value, UpstreamError> {
        tracing::debug!(url = %url, "upstream request");
        match tokio::time::timeout(self.timeout, self.transport.get_json(url)).await {
            Ok(Ok(body)) => Ok(body),
            Ok(Err(err)) => {
                tracing::warn!(url = %url, error = %err, "upstream request failed");
                Err(err)
            }
            Err(_) => {
                tracing::warn!(url = %url, timeout_ms = self.timeout.as_millis() as u64, "upstream request timed out");
                Err(UpstreamError::new(format!(
                    "timeout of {}ms exceeded",
                    self.timeout.as_millis()
                )))
            }
        }
    }

    /// 获取并按目标结构解析
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let body = self.fetch(url).await?;
        serde_json::from_value(body)
            .map_err(|e| UpstreamError::new(format!("unexpected response shape: {}", e)))
    }
}
