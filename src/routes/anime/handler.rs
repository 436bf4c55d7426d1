use axum::{Json, extract::State};
use serde_json::Value;

use crate::AppState;
use crate::cache::keys::{
    anime_characters_key, anime_episodes_key, anime_info_key, anime_random_key, anime_search_key,
};
use crate::common::encode_component;
use crate::error::AppError;
use crate::result::ApiResult;
use crate::routes::{Params, get_or_fetch};

use super::model::{
    AnimeCharacters, AnimeDetail, AnimeEpisodes, AnimeSummary, CastEntry, Episode, JikanAnime,
    JikanCharacterRole, JikanEpisode, JikanResponse, RandomAnime,
};

const MISSING_QUERY: &str = "Query parameter \"q\" is required";
const MISSING_ID: &str = "Anime ID parameter is required";
const DEFAULT_LIMIT: u32 = 10;

type Reply = Result<Json<ApiResult<Value>>, AppError>;

pub async fn anime_search(State(state): State<AppState>, params: Params) -> Reply {
    let query = params.require("q", MISSING_QUERY)?;
    let limit = params.positive_or("limit", DEFAULT_LIMIT)?;

    let url = format!(
        "{}/anime?q={}&limit={}",
        state.config.jikan_base_url,
        encode_component(query),
        limit
    );
    let fetched = get_or_fetch(
        state.cache.as_ref(),
        &anime_search_key(query, limit),
        None,
        || async {
            let body: JikanResponse<Vec<JikanAnime>> = state.upstream.fetch_as(&url).await?;
            Ok(body
                .data
                .into_iter()
                .take(limit as usize)
                .map(AnimeSummary::from)
                .collect::<Vec<_>>())
        },
    )
    .await?;

    Ok(fetched.respond("Anime search completed"))
}

pub async fn anime_info(State(state): State<AppState>, params: Params) -> Reply {
    let id = params.require("id", MISSING_ID)?;

    let url = format!("{}/anime/{}", state.config.jikan_base_url, encode_component(id));
    let fetched = get_or_fetch(state.cache.as_ref(), &anime_info_key(id), None, || async {
        let body: JikanResponse<JikanAnime> = state.upstream.fetch_as(&url).await?;
        Ok(AnimeDetail::from(body.data))
    })
    .await?;

    Ok(fetched.respond("Anime info retrieved"))
}

pub async fn anime_episodes(State(state): State<AppState>, params: Params) -> Reply {
    let id = params.require("id", MISSING_ID)?;

    let url = format!(
        "{}/anime/{}/episodes",
        state.config.jikan_base_url,
        encode_component(id)
    );
    let fetched = get_or_fetch(state.cache.as_ref(), &anime_episodes_key(id), None, || async {
        let body: JikanResponse<Vec<JikanEpisode>> = state.upstream.fetch_as(&url).await?;
        Ok(AnimeEpisodes {
            anime_id: id.to_string(),
            episodes: body.data.into_iter().map(Episode::from).collect(),
            pagination: body.pagination,
        })
    })
    .await?;

    Ok(fetched.respond("Anime episodes retrieved"))
}

pub async fn anime_characters(State(state): State<AppState>, params: Params) -> Reply {
    let id = params.require("id", MISSING_ID)?;

    let url = format!(
        "{}/anime/{}/characters",
        state.config.jikan_base_url,
        encode_component(id)
    );
    let fetched = get_or_fetch(
        state.cache.as_ref(),
        &anime_characters_key(id),
        None,
        || async {
            let body: JikanResponse<Vec<JikanCharacterRole>> =
                state.upstream.fetch_as(&url).await?;
            Ok(AnimeCharacters {
                anime_id: id.to_string(),
                characters: body.data.into_iter().map(CastEntry::from).collect(),
            })
        },
    )
    .await?;

    Ok(fetched.respond("Anime characters retrieved"))
}

/// 随机番剧的缓存时间较短
pub async fn anime_random(State(state): State<AppState>) -> Reply {
    let url = format!("{}/random/anime", state.config.jikan_base_url);
    let fetched = get_or_fetch(
        state.cache.as_ref(),
        &anime_random_key(),
        Some(state.config.cache_random_ttl()),
        || async {
            let body: JikanResponse<JikanAnime> = state.upstream.fetch_as(&url).await?;
            Ok(RandomAnime::from(body.data))
        },
    )
    .await?;

    Ok(fetched.respond("Random anime retrieved"))
}
