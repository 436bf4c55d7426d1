use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serde_json::Value;

use crate::cache::models::CacheEntry;
use crate::utils::Clock;

/// 响应缓存接口
pub trait ResponseCache: Send + Sync {
    /// 读取缓存，过期条目视为不存在
    fn get(&self, key: &str) -> Option<Value>;

    /// 写入缓存，`ttl` 为空时使用默认过期时间
    fn set(&self, key: &str, value: Value, ttl: Option<Duration>);

    /// 当前未过期的条目数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 清理已过期的条目，返回清理数量
    fn purge_expired(&self) -> usize;
}

/// 基于 DashMap 的进程内 TTL 缓存
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            clock,
        }
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let now = self.clock.now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Some(entry.value.clone());
            }
        }
        // 读时发现过期则顺手删除；remove_if 防止误删并发写入的新值
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        None
    }

    fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, self.clock.now(), ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key.to_string(), entry);
    }

    fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .iter()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }
}
