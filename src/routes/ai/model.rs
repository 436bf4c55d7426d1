use serde::Serialize;

use crate::common::excerpt;

#[derive(Debug, Serialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub role: &'static str,
    pub content: String,
    pub model: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Serialize)]
pub struct GeneratedImage {
    pub prompt: String,
    pub size: String,
    pub image_url: &'static str,
    pub model: &'static str,
    pub revised_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct TextInsights {
    pub sentiment: &'static str,
    pub language: &'static str,
    pub word_count: usize,
    pub keywords: [&'static str; 3],
}

/// `summarize`/`translate` 返回字符串，`analyze` 返回结构化结果
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TextOutcome {
    Text(String),
    Insights(TextInsights),
}

impl TextOutcome {
    pub fn for_action(action: &str, text: &str) -> Self {
        match action {
            "summarize" => TextOutcome::Text(format!(
                "Summary: This is a demo summary of the provided text. {}",
                excerpt(text, 100)
            )),
            "translate" => TextOutcome::Text(format!(
                "Translation: [Demo translated version of: {}]",
                excerpt(text, 100)
            )),
            "analyze" => TextOutcome::Insights(TextInsights {
                sentiment: "positive",
                language: "english",
                word_count: text.split(' ').count(),
                keywords: ["demo", "text", "analysis"],
            }),
            _ => TextOutcome::Text("Demo AI text processing result".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TextProcessing {
    pub action: String,
    pub original_text: String,
    pub result: TextOutcome,
}
