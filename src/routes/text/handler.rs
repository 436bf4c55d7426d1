use axum::extract::State;

use crate::AppState;
use crate::result::{ApiReply, success_to_api_response};
use crate::routes::Params;

use super::model::{SentimentReport, Summary, TextAnalysis, Translation};

const MISSING_TEXT: &str = "Text is required";

pub async fn translate(params: Params) -> ApiReply<Translation> {
    let text = params.require("text", MISSING_TEXT)?;
    let from = params.get_or("from", "auto");
    let to = params.get_or("to", "en");

    Ok(success_to_api_response(
        Translation {
            original_text: text.to_string(),
            translated_text: format!("[Demo translation: {}]", text),
            from_language: from.to_string(),
            to_language: to.to_string(),
            confidence: 0.95,
        },
        "Translation completed",
    ))
}

pub async fn summarize(params: Params) -> ApiReply<Summary> {
    let text = params.require("text", MISSING_TEXT)?;
    let length = params.get_or("length", "medium");

    Ok(success_to_api_response(
        Summary::build(text, length),
        "Text summarization completed",
    ))
}

pub async fn analyze(State(state): State<AppState>, params: Params) -> ApiReply<TextAnalysis> {
    let text = params.require("text", MISSING_TEXT)?;

    Ok(success_to_api_response(
        TextAnalysis::analyze(text, &state.random),
        "Text analysis completed",
    ))
}

pub async fn sentiment(
    State(state): State<AppState>,
    params: Params,
) -> ApiReply<SentimentReport> {
    let text = params.require("text", MISSING_TEXT)?;

    Ok(success_to_api_response(
        SentimentReport::classify(text, &state.random),
        "Sentiment analysis completed",
    ))
}
