use std::sync::Arc;

use cache::{FixedWindowLimiter, MemoryCache, ResponseCache};
use config::Config;
use infrastructure::upstream::{HttpTransport, Transport, UpstreamClient};
use middleware::RateLimiter;
use utils::{Clock, RandomSource, SystemClock};

pub mod cache;
pub mod common;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod result;
pub mod router;
pub mod routes;
pub mod utils;

/// 所有处理器共享的应用状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<dyn ResponseCache>,
    pub limiter: Arc<RateLimiter>,
    pub upstream: UpstreamClient,
    pub random: RandomSource,
}

impl AppState {
    /// 使用真实时钟和 HTTP 上游创建状态
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(config.upstream_timeout())?;
        let random = RandomSource::new(config.rng_seed);
        Ok(Self::from_parts(
            config,
            Arc::new(SystemClock),
            Arc::new(transport),
            random,
        ))
    }

    /// 由外部注入时钟、上游传输和随机源组装状态，测试中用来替换真实依赖
    pub fn from_parts(
        config: Config,
        clock: Arc<dyn Clock>,
        transport: Arc<dyn Transport>,
        random: RandomSource,
    ) -> Self {
        let cache = MemoryCache::new(config.cache_ttl(), clock.clone());
        let store = FixedWindowLimiter::new(
            config.rate_limit_requests,
            config.rate_limit_window(),
            clock,
        );
        let upstream = UpstreamClient::new(transport, config.upstream_timeout());

        Self {
            config: Arc::new(config),
            cache: Arc::new(cache),
            limiter: Arc::new(RateLimiter::new(Arc::new(store))),
            upstream,
            random,
        }
    }
}
