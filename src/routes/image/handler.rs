use crate::common::encode_component;
use crate::result::{ApiReply, success_to_api_response};
use crate::routes::Params;

use super::model::{
    AVAILABLE_FILTERS, BackgroundRemoval, Dimensions, FilteredImage, LyricsImage, Meme,
    ResizedImage,
};

const MISSING_IMAGE_URL: &str = "Image URL is required";

pub async fn lyrics(params: Params) -> ApiReply<LyricsImage> {
    let title = params.require("title", "Song title is required")?;
    let artist = params.get_or("artist", "Unknown Artist");

    Ok(success_to_api_response(
        LyricsImage {
            title: title.to_string(),
            artist: artist.to_string(),
            image_url: "https://picsum.photos/800/600?text=Lyrics",
            lyrics: "Demo lyrics content would appear here...",
        },
        "Lyrics image generated",
    ))
}

pub async fn bgremove() -> ApiReply<BackgroundRemoval> {
    Ok(success_to_api_response(
        BackgroundRemoval {
            message: "Background removal demo endpoint",
            processed_url: "https://picsum.photos/400/400?text=No+Background",
            original_size: "1920x1080",
            processed_size: "400x400",
        },
        "Background removal demo",
    ))
}

pub async fn resize(params: Params) -> ApiReply<ResizedImage> {
    let url = params.require("url", MISSING_IMAGE_URL)?;
    let width = params.positive_or("width", 500u32)?;
    let height = params.positive_or("height", 500u32)?;

    Ok(success_to_api_response(
        ResizedImage {
            original_url: url.to_string(),
            resized_url: format!("https://picsum.photos/{}/{}", width, height),
            dimensions: Dimensions { width, height },
            format: "demo",
        },
        "Image resize demo",
    ))
}

pub async fn filters(params: Params) -> ApiReply<FilteredImage> {
    let url = params.require("url", MISSING_IMAGE_URL)?;
    let filter = params.get_or("filter", "grayscale");

    Ok(success_to_api_response(
        FilteredImage {
            original_url: url.to_string(),
            available_filters: AVAILABLE_FILTERS,
            applied_filter: filter.to_string(),
            filtered_url: format!(
                "https://picsum.photos/500/500?text={}+Filter",
                encode_component(filter)
            ),
        },
        "Image filter applied",
    ))
}

pub async fn meme(params: Params) -> ApiReply<Meme> {
    let text = params.require("text", "Text is required")?;
    let template = params.get_or("template", "drake");
    let (top_text, bottom_text) = Meme::split_caption(text);

    Ok(success_to_api_response(
        Meme {
            template: template.to_string(),
            text: text.to_string(),
            meme_url: format!("https://picsum.photos/500/500?text={}", encode_component(text)),
            top_text,
            bottom_text,
        },
        "Meme generated",
    ))
}
