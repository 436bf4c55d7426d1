use std::time::{Duration, Instant};

/// 单个客户端标识的限流窗口
#[derive(Debug, Clone, Copy)]
pub struct RateWindow {
    pub count: u32,
    pub started_at: Instant,
}

impl RateWindow {
    /// 开启新窗口，并计入本次请求
    pub fn open(now: Instant) -> Self {
        Self {
            count: 1,
            started_at: now,
        }
    }

    pub fn is_elapsed(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.started_at) >= window
    }

    /// 距离窗口重置的剩余时间
    pub fn remaining(&self, now: Instant, window: Duration) -> Duration {
        (self.started_at + window).saturating_duration_since(now)
    }
}
