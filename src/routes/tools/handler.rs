use axum::extract::State;

use crate::AppState;
use crate::common::encode_component;
use crate::result::{ApiReply, now_iso8601, success_to_api_response};
use crate::routes::Params;

use super::model::{ExpandedLink, QrCode, ShortLink, Weather};

const SHORT_ID_LEN: usize = 6;

pub async fn weather(params: Params) -> ApiReply<Weather> {
    let city = params.require("city", "City parameter is required")?;

    Ok(success_to_api_response(
        Weather::demo(city),
        "Weather data retrieved",
    ))
}

pub async fn shorten(State(state): State<AppState>, params: Params) -> ApiReply<ShortLink> {
    let url = params.require("url", "URL parameter is required")?;
    let short_id = state.random.base36(SHORT_ID_LEN);

    Ok(success_to_api_response(
        ShortLink {
            original_url: url.to_string(),
            short_url: format!("https://short.link/{}", short_id),
            short_id,
            clicks: 0,
            created_at: now_iso8601(),
        },
        "URL shortened",
    ))
}

pub async fn expand(State(state): State<AppState>, params: Params) -> ApiReply<ExpandedLink> {
    let short_url = params.require("short_url", "Short URL parameter is required")?;

    Ok(success_to_api_response(
        ExpandedLink {
            short_url: short_url.to_string(),
            original_url: "https://example.com/original-long-url-demo",
            created_at: now_iso8601(),
            clicks: state.random.below(1000),
        },
        "URL expanded",
    ))
}

pub async fn qr(params: Params) -> ApiReply<QrCode> {
    let text = params.require("text", "Text parameter is required")?;
    let size = params.get_or("size", "200");

    Ok(success_to_api_response(
        QrCode {
            text: text.to_string(),
            size: size.to_string(),
            qr_url: format!(
                "https://api.qrserver.com/v1/create-qr-code/?size={size}x{size}&data={}",
                encode_component(text),
                size = encode_component(size)
            ),
            format: "PNG",
        },
        "QR code generated",
    ))
}
