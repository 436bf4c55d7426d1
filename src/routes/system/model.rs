use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemoryUsage {
    pub rss: String,
    pub virtual_memory: String,
}

#[derive(Debug, Serialize)]
pub struct RateLimitInfo {
    pub requests: u32,
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub api_name: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub memory_usage: MemoryUsage,
    pub platform: &'static str,
    pub arch: &'static str,
    pub total_apis: usize,
    pub cache_size: usize,
    pub rate_limit: RateLimitInfo,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
}

/// 形如 `1h 2m 3s`
pub fn format_uptime(secs: u64) -> String {
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

pub fn format_megabytes(bytes: u64) -> String {
    format!("{}MB", (bytes as f64 / 1024.0 / 1024.0).round() as u64)
}
