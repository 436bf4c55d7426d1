use axum::extract::State;

use crate::AppState;
use crate::result::{ApiReply, success_to_api_response};
use crate::routes::Params;

use super::model::{InstagramProfile, TiktokProfile, TwitterProfile};

const MISSING_USERNAME: &str = "Username is required";

// 资料为随机占位数据，不进缓存

pub async fn instagram(
    State(state): State<AppState>,
    params: Params,
) -> ApiReply<InstagramProfile> {
    let username = params.require("username", MISSING_USERNAME)?;

    Ok(success_to_api_response(
        InstagramProfile::generate(username, &state.random),
        "Instagram profile info retrieved",
    ))
}

pub async fn tiktok(State(state): State<AppState>, params: Params) -> ApiReply<TiktokProfile> {
    let username = params.require("username", MISSING_USERNAME)?;

    Ok(success_to_api_response(
        TiktokProfile::generate(username, &state.random),
        "TikTok profile info retrieved",
    ))
}

pub async fn twitter(State(state): State<AppState>, params: Params) -> ApiReply<TwitterProfile> {
    let username = params.require("username", MISSING_USERNAME)?;

    Ok(success_to_api_response(
        TwitterProfile::generate(username, &state.random),
        "Twitter profile info retrieved",
    ))
}
