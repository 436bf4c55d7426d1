use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use anyhow::Context;
use media_api::{AppState, cache::spawn_sweeper, config::Config, result::mark_started, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
    mark_started();

    // 加载配置
    let config = Config::from_env().context("Failed to load configuration")?;

    // 设置应用状态
    let state = AppState::new(config).context("Failed to build HTTP client")?;

    // 后台清理过期缓存与限流窗口
    spawn_sweeper(
        state.cache.clone(),
        state.limiter.store(),
        state.config.cache_check_period(),
    );

    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!(
        requests = state.config.rate_limit_requests,
        window_secs = state.config.rate_limit_window().as_secs(),
        total_apis = router::TOTAL_APIS,
        "rate limit configured"
    );

    let app = router::create_router(state);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server terminated unexpectedly")?;

    Ok(())
}
