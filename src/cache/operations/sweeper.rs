use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{RateLimitStore, ResponseCache};

/// 定期清理过期缓存和已结束的限流窗口
pub fn spawn_sweeper(
    cache: Arc<dyn ResponseCache>,
    limits: Arc<dyn RateLimitStore>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // 第一次 tick 立即返回，跳过
        interval.tick().await;

        loop {
            interval.tick().await;
            let entries = cache.purge_expired();
            let windows = limits.purge_expired();
            if entries > 0 || windows > 0 {
                tracing::debug!(entries, windows, "swept expired cache entries");
            }
        }
    })
}
