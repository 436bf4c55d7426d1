use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::{HeaderValue, Method, header},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::AppState;
use crate::middleware::{handle_panic, log_errors, not_found, rate_limit};
use crate::routes::{ai, anime, file, fun, image, social, system, text, tools, validate, youtube};

/// 对外公开的 API 路由数量，`/api/status` 中返回
pub const TOTAL_APIS: usize = 38;

// 系统与媒体
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(system::status))
        .route("/api/health", get(system::health))
}

fn youtube_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ytsearch", get(youtube::ytsearch))
        .route("/api/ytdl", get(youtube::ytdl))
        .route("/api/ytmp4", get(youtube::ytmp4))
        .route("/api/ytmp3", get(youtube::ytmp3))
}

fn anime_routes() -> Router<AppState> {
    Router::new()
        .route("/api/anime/search", get(anime::anime_search))
        .route("/api/anime/info", get(anime::anime_info))
        .route("/api/anime/episodes", get(anime::anime_episodes))
        .route("/api/anime/characters", get(anime::anime_characters))
        .route("/api/anime/random", get(anime::anime_random))
}

// AI 与图片
fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ai/chat", post(ai::ai_chat))
        .route("/api/ai/image", post(ai::ai_image))
        .route("/api/ai/text", post(ai::ai_text))
}

fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/api/image/lyrics", get(image::lyrics))
        .route("/api/image/bgremove", post(image::bgremove))
        .route("/api/image/resize", get(image::resize))
        .route("/api/image/filters", get(image::filters))
        .route("/api/image/meme", get(image::meme))
}

// 工具类
fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/api/weather", get(tools::weather))
        .route("/api/shorten", get(tools::shorten))
        .route("/api/expand", get(tools::expand))
        .route("/api/qr", get(tools::qr))
        .route("/api/validate/email", post(validate::validate_email))
        .route("/api/validate/password", post(validate::validate_password))
}

fn social_routes() -> Router<AppState> {
    Router::new()
        .route("/api/social/instagram", get(social::instagram))
        .route("/api/social/tiktok", get(social::tiktok))
        .route("/api/social/twitter", get(social::twitter))
}

fn text_routes() -> Router<AppState> {
    Router::new()
        .route("/api/text/translate", post(text::translate))
        .route("/api/text/summarize", post(text::summarize))
        .route("/api/text/analyze", post(text::analyze))
        .route("/api/text/sentiment", post(text::sentiment))
}

fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/api/pdf/extract", post(file::pdf_extract))
        .route("/api/convert/image", post(file::convert_image))
        .route("/api/convert/html", post(file::convert_html))
}

// 娱乐
fn fun_routes() -> Router<AppState> {
    Router::new()
        .route("/api/jokes/random", get(fun::random_joke))
        .route("/api/quotes/random", get(fun::random_quote))
        .route("/api/news/random", get(fun::random_news))
}

/// 全部 `/api` 路由，不含中间件
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(system_routes())
        .merge(youtube_routes())
        .merge(anime_routes())
        .merge(ai_routes())
        .merge(image_routes())
        .merge(tool_routes())
        .merge(social_routes())
        .merge(text_routes())
        .merge(file_routes())
        .merge(fun_routes())
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    // 方法不匹配时同样返回 404 信封，而不是空的 405
    // 限流只作用于已匹配的 API 路径，静态文件和未匹配路径不计数
    let api = api_routes()
        .method_not_allowed_fallback(not_found)
        .route_layer(from_fn_with_state(state.limiter.clone(), rate_limit));

    let static_files = ServeDir::new(&state.config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    api.fallback_service(static_files)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(log_errors))
        .layer(DefaultBodyLimit::max(state.config.body_limit_bytes()))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
