//! 带缓存的上游请求管线：查缓存 → 未命中则获取并规整 → 写缓存 → 输出信封。

use std::future::Future;
use std::time::Duration;

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::cache::ResponseCache;
use crate::error::AppError;
use crate::result::{ApiResult, CACHE_HIT_MESSAGE, success_to_api_response};

/// 管线输出：规整后的数据及是否来自缓存
#[derive(Debug, Clone)]
pub struct Fetched {
    pub data: Value,
    pub from_cache: bool,
}

impl Fetched {
    /// 命中缓存时消息固定为 "Data from cache"
    pub fn respond(self, message: &str) -> Json<ApiResult<Value>> {
        let message = if self.from_cache {
            CACHE_HIT_MESSAGE
        } else {
            message
        };
        success_to_api_response(self.data, message)
    }
}

/// 读取缓存，未命中时调用 `compute` 获取并规整数据，再以 `ttl` 写回缓存。
///
/// `ttl` 为 `None` 时使用缓存的默认过期时间。`compute` 失败时不会写缓存。
pub async fn get_or_fetch<T, F, Fut>(
    cache: &dyn ResponseCache,
    key: &str,
    ttl: Option<Duration>,
    compute: F,
) -> Result<Fetched, AppError>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    if let Some(data) = cache.get(key) {
        tracing::debug!(key = %key, "cache hit");
        return Ok(Fetched {
            data,
            from_cache: true,
        });
    }

    tracing::debug!(key = %key, "cache miss, fetching");
    let value = compute().await?;
    let data = serde_json::to_value(value)?;
    cache.set(key, data.clone(), ttl);

    Ok(Fetched {
        data,
        from_cache: false,
    })
}
