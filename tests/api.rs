use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    extract::ConnectInfo,
    http::{Method, Request, StatusCode, header},
};
use media_api::{
    AppState,
    config::Config,
    infrastructure::upstream::{Transport, UpstreamError},
    router::{TOTAL_APIS, create_router},
    utils::{ManualClock, RandomSource},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

/// 按 URL 返回预置的 Jikan/Invidious 响应，并统计调用次数
#[derive(Default)]
struct FakeUpstream {
    calls: AtomicUsize,
}

impl FakeUpstream {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn jikan_anime(id: u64) -> Value {
    json!({
        "mal_id": id,
        "url": format!("https://myanimelist.net/anime/{}", id),
        "images": { "jpg": { "image_url": format!("https://cdn.example/{}.jpg", id) } },
        "title": format!("Anime {}", id),
        "type": "TV",
        "episodes": 12,
        "status": "Finished Airing",
        "score": 8.1,
        "synopsis": "x".repeat(300),
        "genres": [{ "name": "Action" }]
    })
}

#[async_trait]
impl Transport for FakeUpstream {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.contains("/anime?q=") {
            // 上游故意多返回，验证截断
            Ok(json!({ "data": (1..=5).map(jikan_anime).collect::<Vec<_>>() }))
        } else if url.contains("/random/anime") {
            Ok(json!({ "data": jikan_anime(99) }))
        } else if url.ends_with("/anime/20/episodes") {
            Ok(json!({
                "data": [
                    { "mal_id": 1, "title": "Enter: Naruto Uzumaki!", "aired": "2002-10-03T00:00:00+00:00",
                      "score": 4.3, "filler": false, "recap": false,
                      "forum_url": "https://myanimelist.net/forum/?topicid=1" },
                    { "mal_id": 2, "title": "My Name is Konohamaru!" }
                ],
                "pagination": { "last_visible_page": 3, "has_next_page": true }
            }))
        } else if url.ends_with("/anime/20/characters") {
            Ok(json!({
                "data": [{
                    "character": {
                        "mal_id": 17,
                        "name": "Uzumaki, Naruto",
                        "images": { "jpg": { "image_url": "https://cdn.example/c17.jpg" } }
                    },
                    "role": "Main",
                    "voice_actors": [
                        { "person": { "mal_id": 16, "name": "Takeuchi, Junko" }, "language": "Japanese" }
                    ]
                }]
            }))
        } else if url.ends_with("/anime/20") {
            Ok(json!({ "data": jikan_anime(20) }))
        } else if url.contains("/search?q=") {
            Ok(json!([
                { "type": "video", "videoId": "abc", "title": "First", "author": "Someone",
                  "lengthSeconds": 61, "viewCount": 10 },
                { "type": "channel", "author": "Channel only" }
            ]))
        } else {
            Err(UpstreamError::new("upstream responded with status 404 Not Found"))
        }
    }
}

struct Unreachable;

#[async_trait]
impl Transport for Unreachable {
    async fn get_json(&self, _url: &str) -> Result<Value, UpstreamError> {
        Err(UpstreamError::new("connection refused"))
    }
}

struct Hanging;

#[async_trait]
impl Transport for Hanging {
    async fn get_json(&self, _url: &str) -> Result<Value, UpstreamError> {
        std::future::pending().await
    }
}

fn test_config() -> Config {
    Config {
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string(),
        rng_seed: Some(7),
        ..Config::default()
    }
}

fn app_with(config: Config, transport: Arc<dyn Transport>, clock: Arc<ManualClock>) -> Router {
    let random = RandomSource::new(config.rng_seed);
    create_router(AppState::from_parts(config, clock, transport, random))
}

fn app() -> (Router, Arc<FakeUpstream>) {
    let upstream = Arc::new(FakeUpstream::default());
    let router = app_with(test_config(), upstream.clone(), Arc::new(ManualClock::new()));
    (router, upstream)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn from_peer(mut req: Request<Body>, peer: &str) -> Request<Body> {
    let addr: SocketAddr = peer.parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn anime_search_truncates_and_caches() {
    let (app, upstream) = app();

    let (status, first) = send(&app, get("/api/anime/search?q=naruto&limit=3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "success");
    assert_eq!(first["message"], "Anime search completed");
    let items = first["data"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert!(item["id"].is_u64());
        assert!(item["title"].is_string());
        assert!(item["image"].is_string());
        let synopsis = item["synopsis"].as_str().unwrap();
        assert_eq!(synopsis.chars().count(), 203);
        assert!(synopsis.ends_with("..."));
    }

    let (status, second) = send(&app, get("/api/anime/search?limit=3&q=naruto")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["message"], "Data from cache");
    assert_eq!(second["data"], first["data"]);
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn cache_entries_expire_with_the_clock() {
    let upstream = Arc::new(FakeUpstream::default());
    let clock = Arc::new(ManualClock::new());
    let app = app_with(test_config(), upstream.clone(), clock.clone());

    send(&app, get("/api/anime/info?id=20")).await;
    clock.advance(Duration::from_secs(599));
    let (_, hit) = send(&app, get("/api/anime/info?id=20")).await;
    assert_eq!(hit["message"], "Data from cache");

    clock.advance(Duration::from_secs(2));
    let (_, fresh) = send(&app, get("/api/anime/info?id=20")).await;
    assert_eq!(fresh["message"], "Anime info retrieved");
    assert_eq!(upstream.calls(), 2);
}

#[tokio::test]
async fn ytsearch_skips_non_video_items() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/api/ytsearch?q=anime+music&limit=3")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "First");
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let (app, upstream) = app();

    let (status, body) = send(&app, get("/api/anime/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Query parameter \"q\" is required");
    assert!(body.get("data").is_none());
    assert!(body["timestamp"].is_string());

    let (status, body) = send(&app, get("/api/anime/info?id=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Anime ID parameter is required");

    let (status, body) = send(&app, post_json("/api/validate/email", "{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is required");

    let (status, _) = send(&app, get("/api/image/resize?url=x&width=wide")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn rate_limit_rejects_the_101st_request() {
    let clock = Arc::new(ManualClock::new());
    let app = app_with(test_config(), Arc::new(FakeUpstream::default()), clock.clone());

    for _ in 0..100 {
        let (status, _) = send(&app, from_peer(get("/api/health"), "10.0.0.1:5000")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, from_peer(get("/api/health"), "10.0.0.1:5001")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["message"], "Too many requests, please try again later.");
    assert!(body["retryAfter"].as_u64().unwrap() > 0);

    // 其他来源不受影响
    let (status, _) = send(&app, from_peer(get("/api/health"), "10.0.0.2:5000")).await;
    assert_eq!(status, StatusCode::OK);

    clock.advance(Duration::from_secs(60));
    let (status, _) = send(&app, from_peer(get("/api/health"), "10.0.0.1:5000")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn weak_password_report() {
    let (app, _) = app();
    let (status, body) = send(&app, post_json("/api/validate/password", r#"{"password":"abc"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["strength"], "weak");
    assert_eq!(body["data"]["strength_score"], 1);
    assert_eq!(body["data"]["is_valid"], false);
    assert_eq!(body["data"]["password"], "••••••••");
}

#[tokio::test]
async fn unknown_api_path_is_404() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/api/unknown/path")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "API endpoint not found");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn landing_page_is_served() {
    let (app, _) = app();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn upstream_failure_is_500_and_not_cached() {
    let app = app_with(test_config(), Arc::new(Unreachable), Arc::new(ManualClock::new()));

    let (status, body) = send(&app, get("/api/anime/info?id=1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("connection refused"));

    let (_, status_body) = send(&app, get("/api/status")).await;
    assert_eq!(status_body["data"]["cache_size"], 0);
}

#[tokio::test(start_paused = true)]
async fn upstream_timeout_is_500() {
    let app = app_with(test_config(), Arc::new(Hanging), Arc::new(ManualClock::new()));

    let (status, body) = send(&app, get("/api/anime/random")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("timeout of 30000ms exceeded"));
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let (app, _) = app();
    let (status, body) = send(&app, post_json("/api/ai/chat", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON body");
}

#[tokio::test]
async fn oversized_body_is_413() {
    let config = Config {
        body_limit_mb: 1,
        ..test_config()
    };
    let app = app_with(config, Arc::new(FakeUpstream::default()), Arc::new(ManualClock::new()));
    let payload = format!(r#"{{"text":"{}"}}"#, "a".repeat(2 * 1024 * 1024));

    let (status, body) = send(&app, post_json("/api/text/analyze", &payload)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn form_and_json_bodies_are_accepted() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        post_json("/api/text/summarize", r#"{"text":"abcd","length":"short"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["summary"], "abcd... [Demo summary]");

    let form = Request::builder()
        .method(Method::POST)
        .uri("/api/text/translate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("text=hola&to=es"))
        .unwrap();
    let (status, body) = send(&app, form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["to_language"], "es");
    assert_eq!(body["data"]["from_language"], "auto");
}

#[tokio::test]
async fn status_and_health() {
    let (app, _) = app();

    let (status, health) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["data"]["status"], "healthy");

    let (status, report) = send(&app, get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["message"], "API Status Retrieved");
    assert_eq!(report["data"]["total_apis"], TOTAL_APIS);
    assert_eq!(report["data"]["rate_limit"]["requests"], 100);
    assert_eq!(report["data"]["rate_limit"]["duration"], "60 seconds");
}

#[tokio::test]
async fn security_headers_are_set() {
    let (app, _) = app();
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "SAMEORIGIN");
}

const MISSING_URL: &str = "URL parameter is required";
const MISSING_QUERY: &str = "Query parameter \"q\" is required";
const MISSING_ANIME_ID: &str = "Anime ID parameter is required";
const MISSING_TEXT: &str = "Text is required";
const MISSING_IMAGE_URL: &str = "Image URL is required";
const MISSING_USERNAME: &str = "Username is required";

/// (方法, 路径, 缺少必填参数时的错误信息；`None` 表示没有必填参数)
const ENDPOINTS: [(&str, &str, Option<&str>); TOTAL_APIS] = [
    ("GET", "/api/status", None),
    ("GET", "/api/health", None),
    ("GET", "/api/ytsearch", Some(MISSING_QUERY)),
    ("GET", "/api/ytdl", Some(MISSING_URL)),
    ("GET", "/api/ytmp4", Some(MISSING_URL)),
    ("GET", "/api/ytmp3", Some(MISSING_URL)),
    ("GET", "/api/anime/search", Some(MISSING_QUERY)),
    ("GET", "/api/anime/info", Some(MISSING_ANIME_ID)),
    ("GET", "/api/anime/episodes", Some(MISSING_ANIME_ID)),
    ("GET", "/api/anime/characters", Some(MISSING_ANIME_ID)),
    ("GET", "/api/anime/random", None),
    ("POST", "/api/ai/chat", Some("Message is required")),
    ("POST", "/api/ai/image", Some("Prompt is required")),
    ("POST", "/api/ai/text", Some(MISSING_TEXT)),
    ("GET", "/api/image/lyrics", Some("Song title is required")),
    ("POST", "/api/image/bgremove", None),
    ("GET", "/api/image/resize", Some(MISSING_IMAGE_URL)),
    ("GET", "/api/image/filters", Some(MISSING_IMAGE_URL)),
    ("GET", "/api/image/meme", Some(MISSING_TEXT)),
    ("GET", "/api/weather", Some("City parameter is required")),
    ("GET", "/api/shorten", Some(MISSING_URL)),
    ("GET", "/api/expand", Some("Short URL parameter is required")),
    ("GET", "/api/qr", Some("Text parameter is required")),
    ("POST", "/api/validate/email", Some("Email is required")),
    ("POST", "/api/validate/password", Some("Password is required")),
    ("GET", "/api/social/instagram", Some(MISSING_USERNAME)),
    ("GET", "/api/social/tiktok", Some(MISSING_USERNAME)),
    ("GET", "/api/social/twitter", Some(MISSING_USERNAME)),
    ("POST", "/api/text/translate", Some(MISSING_TEXT)),
    ("POST", "/api/text/summarize", Some(MISSING_TEXT)),
    ("POST", "/api/text/analyze", Some(MISSING_TEXT)),
    ("POST", "/api/text/sentiment", Some(MISSING_TEXT)),
    ("POST", "/api/pdf/extract", Some("PDF URL is required")),
    ("POST", "/api/convert/image", Some(MISSING_IMAGE_URL)),
    ("POST", "/api/convert/html", Some("URL is required")),
    ("GET", "/api/jokes/random", None),
    ("GET", "/api/quotes/random", None),
    ("GET", "/api/news/random", None),
];

fn bare_request(method: &str, path: &str) -> Request<Body> {
    if method == "POST" {
        post_json(path, "{}")
    } else {
        get(path)
    }
}

#[tokio::test]
async fn every_endpoint_validates_required_params() {
    let (app, _) = app();
    for (method, path, missing) in ENDPOINTS {
        let (status, body) = send(&app, bare_request(method, path)).await;
        match missing {
            Some(message) => {
                assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, path);
                assert_eq!(body["status"], "error", "{} {}", method, path);
                assert_eq!(body["message"], message, "{} {}", method, path);
                assert!(body.get("data").is_none(), "{} {}", method, path);
            }
            None => {
                assert_eq!(status, StatusCode::OK, "{} {}", method, path);
                assert_eq!(body["status"], "success", "{} {}", method, path);
            }
        }
    }
}

#[tokio::test]
async fn wrong_method_gets_an_error_envelope() {
    let (app, _) = app();
    for (method, path) in [
        ("POST", "/api/health"),
        ("GET", "/api/ai/chat"),
        ("DELETE", "/api/status"),
    ] {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, path);
        assert_eq!(body["status"], "error", "{} {}", method, path);
        assert_eq!(body["message"], "API endpoint not found", "{} {}", method, path);
    }
}

#[tokio::test]
async fn anime_episodes_are_normalized_and_cached() {
    let (app, upstream) = app();

    let (status, first) = send(&app, get("/api/anime/episodes?id=20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Anime episodes retrieved");
    let data = &first["data"];
    assert_eq!(data["anime_id"], "20");
    assert_eq!(data["episodes"].as_array().unwrap().len(), 2);
    assert_eq!(data["episodes"][0]["episode_id"], 1);
    assert_eq!(data["episodes"][0]["title"], "Enter: Naruto Uzumaki!");
    assert_eq!(data["episodes"][0]["filler"], false);
    assert_eq!(data["episodes"][1]["episode_id"], 2);
    assert!(data["episodes"][1]["score"].is_null());
    assert_eq!(data["pagination"]["last_visible_page"], 3);
    assert_eq!(data["pagination"]["has_next_page"], true);

    let (_, second) = send(&app, get("/api/anime/episodes?id=20")).await;
    assert_eq!(second["message"], "Data from cache");
    assert_eq!(second["data"], first["data"]);
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn anime_characters_are_normalized_and_cached() {
    let (app, upstream) = app();

    let (status, first) = send(&app, get("/api/anime/characters?id=20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Anime characters retrieved");
    let cast = &first["data"]["characters"][0];
    assert_eq!(first["data"]["anime_id"], "20");
    assert_eq!(cast["character"]["id"], 17);
    assert_eq!(cast["character"]["name"], "Uzumaki, Naruto");
    assert_eq!(cast["character"]["image"], "https://cdn.example/c17.jpg");
    assert_eq!(cast["role"], "Main");
    assert_eq!(cast["voice_actors"][0]["person"]["id"], 16);
    assert_eq!(cast["voice_actors"][0]["language"], "Japanese");

    let (_, second) = send(&app, get("/api/anime/characters?id=20")).await;
    assert_eq!(second["message"], "Data from cache");
    assert_eq!(second["data"], first["data"]);
    assert_eq!(upstream.calls(), 1);
}

/// 记录上游请求的 URL
#[derive(Default)]
struct RecordingUpstream {
    urls: parking_lot::Mutex<Vec<String>>,
}

#[async_trait]
impl Transport for RecordingUpstream {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        self.urls.lock().push(url.to_string());
        Ok(json!({ "data": [] }))
    }
}

#[tokio::test]
async fn path_segments_encode_spaces_as_percent_20() {
    let upstream = Arc::new(RecordingUpstream::default());
    let app = app_with(test_config(), upstream.clone(), Arc::new(ManualClock::new()));

    let (status, _) = send(&app, get("/api/anime/episodes?id=20%201")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, get("/api/anime/search?q=one%20piece")).await;
    assert_eq!(status, StatusCode::OK);

    let urls = upstream.urls.lock().clone();
    assert_eq!(
        urls,
        vec![
            "https://api.jikan.moe/v4/anime/20%201/episodes".to_string(),
            "https://api.jikan.moe/v4/anime?q=one%20piece&limit=10".to_string(),
        ]
    );
}

#[tokio::test]
async fn demo_endpoints_answer_with_defaults() {
    let (app, _) = app();

    let (_, body) = send(&app, get("/api/image/meme?text=top,bottom")).await;
    assert_eq!(body["data"]["template"], "drake");
    assert_eq!(body["data"]["top_text"], "top");
    assert_eq!(body["data"]["bottom_text"], "bottom");

    let (_, body) = send(&app, get("/api/shorten?url=https://example.com")).await;
    let id = body["data"]["short_id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert_eq!(body["data"]["short_url"], format!("https://short.link/{}", id));

    let (_, body) = send(&app, get("/api/qr?text=Hello%20World")).await;
    assert_eq!(
        body["data"]["qr_url"],
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=Hello%20World"
    );

    let (_, body) = send(&app, post_json("/api/ai/chat", r#"{"message":"hi"}"#)).await;
    assert_eq!(body["data"]["model"], "gpt-3.5-turbo");
}
