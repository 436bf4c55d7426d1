/// 缓存操作
/// 提供响应缓存、限流计数和后台清理的实现

pub mod rate_limit;
pub mod response;
pub mod sweeper;

pub use rate_limit::{FixedWindowLimiter, RateDecision, RateLimitStore};
pub use response::{MemoryCache, ResponseCache};
pub use sweeper::spawn_sweeper;
