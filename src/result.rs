use std::time::Instant;

use axum::Json;
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::AppError;

static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

/// 缓存命中时统一使用的提示信息
pub const CACHE_HIT_MESSAGE: &str = "Data from cache";

/// 记录进程启动时间，uptime 从这里开始计算
pub fn mark_started() {
    Lazy::force(&STARTED_AT);
}

pub fn uptime_secs() -> u64 {
    STARTED_AT.elapsed().as_secs()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// 统一响应信封
#[derive(Debug, Serialize)]
pub struct ApiResult<T> {
    pub status: ApiStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 仅限流响应携带，单位毫秒
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    pub timestamp: String,
    pub uptime: u64,
}

/// 处理器的统一返回类型
pub type ApiReply<T> = Result<Json<ApiResult<T>>, AppError>;

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: Some(data),
            retry_after: None,
            timestamp: now_iso8601(),
            uptime: uptime_secs(),
        }
    }
}

impl ApiResult<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: None,
            retry_after: None,
            timestamp: now_iso8601(),
            uptime: uptime_secs(),
        }
    }

    pub fn rate_limited(message: impl Into<String>, retry_after_ms: u64) -> Self {
        Self {
            retry_after: Some(retry_after_ms),
            ..Self::error(message)
        }
    }
}

pub fn success_to_api_response<T: Serialize>(
    data: T,
    message: impl Into<String>,
) -> Json<ApiResult<T>> {
    Json(ApiResult::success(data, message))
}

pub fn error_to_api_response(message: impl Into<String>) -> Json<ApiResult<()>> {
    Json(ApiResult::error(message))
}

/// 当前 UTC 时间，RFC 3339 毫秒精度
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let body = serde_json::to_value(ApiResult::success(json!({"a": 1}), "ok")).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "ok");
        assert_eq!(body["data"]["a"], 1);
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(body["uptime"].is_u64());
        assert!(body.get("retryAfter").is_none());
    }

    #[test]
    fn error_envelope_has_no_data() {
        let body = serde_json::to_value(ApiResult::error("nope")).unwrap();
        assert_eq!(body["status"], "error");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn rate_limited_envelope_carries_retry_after() {
        let body = serde_json::to_value(ApiResult::rate_limited("slow down", 1500)).unwrap();
        assert_eq!(body["retryAfter"], 1500);
        assert_eq!(body["status"], "error");
    }
}
