use axum::extract::State;

use crate::AppState;
use crate::result::{ApiReply, now_iso8601, success_to_api_response};

use super::model::{JOKES, Joke, NewsArticle, QUOTES, Quote};

pub async fn random_joke(State(state): State<AppState>) -> ApiReply<Joke> {
    let joke = state.random.pick(&JOKES).copied().unwrap_or(JOKES[0]);

    Ok(success_to_api_response(
        Joke {
            joke,
            category: "programming",
            safe: true,
            language: "en",
        },
        "Random joke retrieved",
    ))
}

pub async fn random_quote(State(state): State<AppState>) -> ApiReply<Quote> {
    let (quote, author) = state.random.pick(&QUOTES).copied().unwrap_or(QUOTES[0]);

    Ok(success_to_api_response(
        Quote {
            quote,
            author,
            category: "inspirational",
        },
        "Random quote retrieved",
    ))
}

pub async fn random_news() -> ApiReply<NewsArticle> {
    Ok(success_to_api_response(
        NewsArticle {
            title: "Breaking News: New API Version Released",
            description: "The amazing new API version 7.0 has been released with 30+ free endpoints!",
            source: "Demo News",
            published_at: now_iso8601(),
            url: "https://demo-news.com/article",
            image: "https://picsum.photos/400/250?text=News",
        },
        "Random news article retrieved",
    ))
}
