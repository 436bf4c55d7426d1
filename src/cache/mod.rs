// 缓存模块
// 包含响应缓存、限流窗口的数据结构和操作逻辑，均为进程内存储

pub mod keys;
pub mod models;
pub mod operations;

// 重新导出常用类型和函数，方便其他模块使用
pub use models::{CacheEntry, RateWindow};
pub use operations::{
    FixedWindowLimiter, MemoryCache, RateDecision, RateLimitStore, ResponseCache, spawn_sweeper,
};
