use serde::{Deserialize, Serialize};

/// Invidious 搜索结果中的一项，频道、播放列表等条目没有 videoId
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvidiousItem {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub length_seconds: Option<u64>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub video_thumbnails: Option<Vec<InvidiousThumbnail>>,
    #[serde(default)]
    pub published_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvidiousThumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoResult {
    pub id: String,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<u64>,
    pub views: Option<u64>,
    pub thumbnail: Option<String>,
    pub url: String,
    pub uploaded: Option<String>,
}

impl VideoResult {
    pub fn from_item(item: InvidiousItem) -> Option<Self> {
        let id = item.video_id?;
        Some(Self {
            url: format!("https://www.youtube.com/watch?v={}", id),
            id,
            title: item.title,
            channel: item.author,
            duration: item.length_seconds,
            views: item.view_count,
            thumbnail: item
                .video_thumbnails
                .and_then(|thumbs| thumbs.into_iter().next())
                .and_then(|thumb| thumb.url),
            uploaded: item.published_text,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DownloadInfo {
    pub message: &'static str,
    pub url: String,
    pub formats: [&'static str; 3],
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MediaDownload {
    pub message: &'static str,
    pub url: String,
    pub quality: [&'static str; 3],
    pub download_link: String,
}

impl MediaDownload {
    pub fn new(message: &'static str, url: &str, quality: [&'static str; 3]) -> Self {
        Self {
            message,
            url: url.to_string(),
            quality,
            download_link: format!("#placeholder_for_{}", url),
        }
    }
}
