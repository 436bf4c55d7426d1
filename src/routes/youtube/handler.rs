use axum::{Json, extract::State};
use serde_json::Value;

use crate::AppState;
use crate::cache::keys::ytsearch_key;
use crate::common::encode_component;
use crate::error::AppError;
use crate::result::{ApiReply, ApiResult, success_to_api_response};
use crate::routes::{Params, get_or_fetch};

use super::model::{DownloadInfo, InvidiousItem, MediaDownload, VideoResult};

const MISSING_URL: &str = "URL parameter is required";
const DEFAULT_LIMIT: u32 = 10;

pub async fn ytsearch(
    State(state): State<AppState>,
    params: Params,
) -> Result<Json<ApiResult<Value>>, AppError> {
    let query = params.require("q", "Query parameter \"q\" is required")?;
    let limit = params.positive_or("limit", DEFAULT_LIMIT)?;

    let url = format!(
        "{}/search?q={}&limit={}",
        state.config.invidious_base_url,
        encode_component(query),
        limit
    );
    let fetched = get_or_fetch(
        state.cache.as_ref(),
        &ytsearch_key(query, limit),
        None,
        || async {
            let items: Vec<InvidiousItem> = state.upstream.fetch_as(&url).await?;
            // Invidious 不保证遵守 limit，这里再截断一次
            Ok(items
                .into_iter()
                .filter_map(VideoResult::from_item)
                .take(limit as usize)
                .collect::<Vec<_>>())
        },
    )
    .await?;

    Ok(fetched.respond("YouTube search completed"))
}

pub async fn ytdl(params: Params) -> ApiReply<DownloadInfo> {
    let url = params.require("url", MISSING_URL)?;

    Ok(success_to_api_response(
        DownloadInfo {
            message: "Download functionality requires additional setup",
            url: url.to_string(),
            formats: ["mp4", "mp3", "webm"],
            note: "Configure a downloader backend for actual downloading",
        },
        "YouTube download info",
    ))
}

pub async fn ytmp4(params: Params) -> ApiReply<MediaDownload> {
    let url = params.require("url", MISSING_URL)?;

    Ok(success_to_api_response(
        MediaDownload::new("MP4 download endpoint", url, ["720p", "480p", "360p"]),
        "MP4 download info",
    ))
}

pub async fn ytmp3(params: Params) -> ApiReply<MediaDownload> {
    let url = params.require("url", MISSING_URL)?;

    Ok(success_to_api_response(
        MediaDownload::new("MP3 download endpoint", url, ["128kbps", "192kbps", "320kbps"]),
        "MP3 download info",
    ))
}
