use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::cache::models::RateWindow;
use crate::utils::Clock;

/// 一次 consume 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Rejected { retry_after: Duration },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed { .. })
    }
}

/// 限流计数接口
pub trait RateLimitStore: Send + Sync {
    /// 为 `identity` 消耗一个点数
    fn consume(&self, identity: &str) -> RateDecision;

    /// 清理已经结束的窗口，返回清理数量
    fn purge_expired(&self) -> usize;
}

/// 固定窗口限流：每个标识在一个窗口内最多 `points` 次请求
pub struct FixedWindowLimiter {
    windows: DashMap<String, RateWindow>,
    points: u32,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl FixedWindowLimiter {
    pub fn new(points: u32, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            windows: DashMap::new(),
            points,
            window,
            clock,
        }
    }
}

impl RateLimitStore for FixedWindowLimiter {
    fn consume(&self, identity: &str) -> RateDecision {
        let now = self.clock.now();

        // entry 持有分片写锁，同一标识的计数更新互斥
        match self.windows.entry(identity.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(RateWindow::open(now));
                RateDecision::Allowed {
                    remaining: self.points.saturating_sub(1),
                }
            }
            Entry::Occupied(mut occupied) => {
                let window = occupied.get_mut();
                if window.is_elapsed(now, self.window) {
                    *window = RateWindow::open(now);
                } else if window.count >= self.points {
                    let wait = window.remaining(now, self.window);
                    return RateDecision::Rejected {
                        retry_after: wait.max(Duration::from_millis(1)),
                    };
                } else {
                    window.count += 1;
                }
                RateDecision::Allowed {
                    remaining: self.points.saturating_sub(window.count),
                }
            }
        }
    }

    fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.windows.len();
        self.windows
            .retain(|_, window| !window.is_elapsed(now, self.window));
        before.saturating_sub(self.windows.len())
    }
}
