use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::excerpt;

/// 列表和随机接口中简介的最大长度
const SYNOPSIS_PREVIEW_CHARS: usize = 200;

// ---- Jikan 上游响应 ----

#[derive(Debug, Deserialize)]
pub struct JikanResponse<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanImages {
    #[serde(default)]
    pub jpg: Option<JikanImageSet>,
}

impl JikanImages {
    fn jpg_url(images: Option<JikanImages>) -> Option<String> {
        images.and_then(|i| i.jpg).and_then(|jpg| jpg.image_url)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanLabel {
    #[serde(default)]
    pub string: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanTrailer {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanNamed {
    pub name: String,
}

fn names(items: Option<Vec<JikanNamed>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.name)
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct JikanAnime {
    pub mal_id: u64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<JikanImages>,
    #[serde(default)]
    pub trailer: Option<JikanTrailer>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub aired: Option<JikanLabel>,
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default)]
    pub broadcast: Option<JikanLabel>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub scored_by: Option<u64>,
    #[serde(default)]
    pub rank: Option<u64>,
    #[serde(default)]
    pub popularity: Option<u64>,
    #[serde(default)]
    pub members: Option<u64>,
    #[serde(default)]
    pub favorites: Option<u64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Option<Vec<JikanNamed>>,
    #[serde(default)]
    pub themes: Option<Vec<JikanNamed>>,
    #[serde(default)]
    pub demographics: Option<Vec<JikanNamed>>,
    #[serde(default)]
    pub studios: Option<Vec<JikanNamed>>,
}

#[derive(Debug, Deserialize)]
pub struct JikanEpisode {
    pub mal_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub aired: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub filler: Option<bool>,
    #[serde(default)]
    pub recap: Option<bool>,
    #[serde(default)]
    pub forum_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanEntity {
    pub mal_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Option<JikanImages>,
}

#[derive(Debug, Deserialize)]
pub struct JikanVoiceActor {
    pub person: JikanEntity,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanCharacterRole {
    pub character: JikanEntity,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub voice_actors: Option<Vec<JikanVoiceActor>>,
}

// ---- 对外输出结构 ----

#[derive(Debug, Serialize)]
pub struct AnimeSummary {
    pub id: u64,
    pub title: Option<String>,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub year: Option<i32>,
    pub score: Option<f64>,
    pub rank: Option<u64>,
    pub synopsis: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl From<JikanAnime> for AnimeSummary {
    fn from(anime: JikanAnime) -> Self {
        Self {
            id: anime.mal_id,
            title: anime.title,
            title_english: anime.title_english,
            title_japanese: anime.title_japanese,
            kind: anime.kind,
            episodes: anime.episodes,
            status: anime.status,
            year: anime.year,
            score: anime.score,
            rank: anime.rank,
            synopsis: anime
                .synopsis
                .map(|s| excerpt(&s, SYNOPSIS_PREVIEW_CHARS)),
            image: JikanImages::jpg_url(anime.images),
            url: anime.url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnimeDetail {
    pub id: u64,
    pub title: Option<String>,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub aired: Option<String>,
    pub premiered: Option<String>,
    pub broadcast: Option<String>,
    pub year: Option<i32>,
    pub season: Option<String>,
    pub score: Option<f64>,
    pub scored_by: Option<u64>,
    pub rank: Option<u64>,
    pub popularity: Option<u64>,
    pub members: Option<u64>,
    pub favorites: Option<u64>,
    pub synopsis: Option<String>,
    pub background: Option<String>,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub demographics: Vec<String>,
    pub studios: Vec<String>,
    pub image: Option<String>,
    pub trailer: Option<String>,
    pub url: Option<String>,
}

impl From<JikanAnime> for AnimeDetail {
    fn from(anime: JikanAnime) -> Self {
        Self {
            id: anime.mal_id,
            title: anime.title,
            title_english: anime.title_english,
            title_japanese: anime.title_japanese,
            kind: anime.kind,
            episodes: anime.episodes,
            status: anime.status,
            aired: anime.aired.and_then(|a| a.string),
            premiered: anime.premiered,
            broadcast: anime.broadcast.and_then(|b| b.string),
            year: anime.year,
            season: anime.season,
            score: anime.score,
            scored_by: anime.scored_by,
            rank: anime.rank,
            popularity: anime.popularity,
            members: anime.members,
            favorites: anime.favorites,
            synopsis: anime.synopsis,
            background: anime.background,
            genres: names(anime.genres),
            themes: names(anime.themes),
            demographics: names(anime.demographics),
            studios: names(anime.studios),
            image: JikanImages::jpg_url(anime.images),
            trailer: anime.trailer.and_then(|t| t.url),
            url: anime.url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Episode {
    pub episode_id: u64,
    pub title: Option<String>,
    pub title_japanese: Option<String>,
    pub aired: Option<String>,
    pub score: Option<f64>,
    pub filler: Option<bool>,
    pub recap: Option<bool>,
    pub forum_url: Option<String>,
}

impl From<JikanEpisode> for Episode {
    fn from(ep: JikanEpisode) -> Self {
        Self {
            episode_id: ep.mal_id,
            title: ep.title,
            title_japanese: ep.title_japanese,
            aired: ep.aired,
            score: ep.score,
            filler: ep.filler,
            recap: ep.recap,
            forum_url: ep.forum_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnimeEpisodes {
    pub anime_id: String,
    pub episodes: Vec<Episode>,
    pub pagination: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CharacterRef {
    pub id: u64,
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonRef {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoiceActor {
    pub person: PersonRef,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CastEntry {
    pub character: CharacterRef,
    pub role: Option<String>,
    pub voice_actors: Vec<VoiceActor>,
}

impl From<JikanCharacterRole> for CastEntry {
    fn from(entry: JikanCharacterRole) -> Self {
        Self {
            character: CharacterRef {
                id: entry.character.mal_id,
                name: entry.character.name,
                image: JikanImages::jpg_url(entry.character.images),
            },
            role: entry.role,
            voice_actors: entry
                .voice_actors
                .unwrap_or_default()
                .into_iter()
                .map(|va| VoiceActor {
                    person: PersonRef {
                        id: va.person.mal_id,
                        name: va.person.name,
                    },
                    language: va.language,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnimeCharacters {
    pub anime_id: String,
    pub characters: Vec<CastEntry>,
}

#[derive(Debug, Serialize)]
pub struct RandomAnime {
    pub id: u64,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub score: Option<f64>,
    pub rank: Option<u64>,
    pub synopsis: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl From<JikanAnime> for RandomAnime {
    fn from(anime: JikanAnime) -> Self {
        Self {
            id: anime.mal_id,
            title: anime.title,
            kind: anime.kind,
            episodes: anime.episodes,
            score: anime.score,
            rank: anime.rank,
            synopsis: anime
                .synopsis
                .map(|s| excerpt(&s, SYNOPSIS_PREVIEW_CHARS)),
            image: JikanImages::jpg_url(anime.images),
            url: anime.url,
        }
    }
}
