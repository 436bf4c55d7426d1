use serde::Serialize;

pub const AVAILABLE_FILTERS: [&str; 6] =
    ["grayscale", "sepia", "blur", "brightness", "contrast", "vintage"];

#[derive(Debug, Serialize)]
pub struct LyricsImage {
    pub title: String,
    pub artist: String,
    pub image_url: &'static str,
    pub lyrics: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BackgroundRemoval {
    pub message: &'static str,
    pub processed_url: &'static str,
    pub original_size: &'static str,
    pub processed_size: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
pub struct ResizedImage {
    pub original_url: String,
    pub resized_url: String,
    pub dimensions: Dimensions,
    pub format: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FilteredImage {
    pub original_url: String,
    pub available_filters: [&'static str; 6],
    pub applied_filter: String,
    pub filtered_url: String,
}

#[derive(Debug, Serialize)]
pub struct Meme {
    pub template: String,
    pub text: String,
    pub meme_url: String,
    pub top_text: String,
    pub bottom_text: String,
}

impl Meme {
    /// 文本按第一个逗号拆成上下两行
    pub fn split_caption(text: &str) -> (String, String) {
        let mut parts = text.split(',');
        let top = parts.next().filter(|s| !s.is_empty()).unwrap_or(text);
        let bottom = parts.next().unwrap_or_default();
        (top.to_string(), bottom.to_string())
    }
}
