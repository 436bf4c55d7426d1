use crate::result::{ApiReply, success_to_api_response};
use crate::routes::Params;

use super::model::{ChatReply, GeneratedImage, TextOutcome, TextProcessing, TokenUsage};

pub async fn ai_chat(params: Params) -> ApiReply<ChatReply> {
    let message = params.require("message", "Message is required")?;
    let model = params.get_or("model", "gpt-3.5-turbo");

    Ok(success_to_api_response(
        ChatReply {
            role: "assistant",
            content: format!(
                "AI Response to: \"{}\". This is a demo response. Connect a model provider for real replies.",
                message
            ),
            model: model.to_string(),
            usage: TokenUsage {
                prompt_tokens: 50,
                completion_tokens: 30,
                total_tokens: 80,
            },
        },
        "AI chat response generated",
    ))
}

pub async fn ai_image(params: Params) -> ApiReply<GeneratedImage> {
    let prompt = params.require("prompt", "Prompt is required")?;
    let size = params.get_or("size", "512x512");

    Ok(success_to_api_response(
        GeneratedImage {
            prompt: prompt.to_string(),
            size: size.to_string(),
            image_url: "https://picsum.photos/512/512",
            model: "dall-e-demo",
            revised_prompt: format!("Demo revised prompt for: {}", prompt),
        },
        "Image generation demo",
    ))
}

pub async fn ai_text(params: Params) -> ApiReply<TextProcessing> {
    let text = params.require("text", "Text is required")?;
    let action = params.get_or("action", "summarize");

    Ok(success_to_api_response(
        TextProcessing {
            action: action.to_string(),
            original_text: text.to_string(),
            result: TextOutcome::for_action(action, text),
        },
        "AI text processing completed",
    ))
}
