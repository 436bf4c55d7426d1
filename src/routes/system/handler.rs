use axum::extract::State;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::AppState;
use crate::result::{ApiReply, success_to_api_response, uptime_secs};
use crate::router::TOTAL_APIS;

use super::model::{
    HealthReport, MemoryUsage, RateLimitInfo, StatusReport, format_megabytes, format_uptime,
};

const API_NAME: &str = "Anime & Media API";

pub async fn status(State(state): State<AppState>) -> ApiReply<StatusReport> {
    let uptime = uptime_secs();

    Ok(success_to_api_response(
        StatusReport {
            api_name: API_NAME,
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: uptime,
            uptime_human: format_uptime(uptime),
            memory_usage: memory_usage(),
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            total_apis: TOTAL_APIS,
            cache_size: state.cache.len(),
            rate_limit: RateLimitInfo {
                requests: state.config.rate_limit_requests,
                duration: format!("{} seconds", state.config.rate_limit_window_secs),
            },
        },
        "API Status Retrieved",
    ))
}

pub async fn health() -> ApiReply<HealthReport> {
    Ok(success_to_api_response(
        HealthReport { status: "healthy" },
        "Service is healthy",
    ))
}

fn memory_usage() -> MemoryUsage {
    let pid = Pid::from_u32(std::process::id());
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    match system.process(pid) {
        Some(process) => MemoryUsage {
            rss: format_megabytes(process.memory()),
            virtual_memory: format_megabytes(process.virtual_memory()),
        },
        None => {
            tracing::warn!(pid = %pid, "current process not found in process table");
            MemoryUsage {
                rss: "unknown".to_string(),
                virtual_memory: "unknown".to_string(),
            }
        }
    }
}
