use serde::Serialize;

use crate::common::{preview, truncate_chars};
use crate::utils::RandomSource;

const PREVIEW_CHARS: usize = 100;
const WORDS_PER_MINUTE: usize = 200;
const SENTIMENTS: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

#[derive(Debug, Serialize)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub from_language: String,
    pub to_language: String,
    pub confidence: f64,
}

/// 摘要长度档位，未知取值按 medium 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "short" => SummaryLength::Short,
            "long" => SummaryLength::Long,
            _ => SummaryLength::Medium,
        }
    }

    fn budget(self) -> usize {
        match self {
            SummaryLength::Short => 50,
            SummaryLength::Medium => 100,
            SummaryLength::Long => 200,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            SummaryLength::Short => "... [Demo summary]",
            SummaryLength::Medium => "... [Demo medium summary]",
            SummaryLength::Long => "... [Demo detailed summary]",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub original_text: String,
    pub summary: String,
    pub summary_length: String,
    pub original_length: usize,
    pub compression_ratio: String,
}

impl Summary {
    /// `requested` 原样回显，档位由其解析
    pub fn build(text: &str, requested: &str) -> Self {
        let length = SummaryLength::parse(requested);
        let summary = format!("{}{}", truncate_chars(text, length.budget()), length.suffix());
        let original_length = text.chars().count();
        let ratio = summary.chars().count() as f64 / original_length.max(1) as f64 * 100.0;
        Self {
            original_text: text.to_string(),
            summary,
            summary_length: requested.to_string(),
            original_length,
            compression_ratio: format!("{:.1}%", ratio),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Serialize)]
pub struct TextAnalysis {
    pub text: String,
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub average_word_length: String,
    pub average_sentence_length: String,
    pub language: &'static str,
    pub sentiment: Sentiment,
    pub keywords: [&'static str; 4],
    pub reading_time: String,
}

impl TextAnalysis {
    pub fn analyze(text: &str, random: &RandomSource) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|sentence| !sentence.trim().is_empty())
            .count();
        let letters: usize = words.iter().map(|word| word.chars().count()).sum();

        Self {
            text: preview(text, PREVIEW_CHARS),
            word_count: words.len(),
            character_count: text.chars().count(),
            sentence_count,
            average_word_length: average(letters, words.len()),
            average_sentence_length: average(words.len(), sentence_count),
            language: "english",
            sentiment: if random.unit() > 0.5 {
                Sentiment::Positive
            } else {
                Sentiment::Neutral
            },
            keywords: ["demo", "text", "analysis", "sample"],
            reading_time: format!("{} min", words.len().div_ceil(WORDS_PER_MINUTE)),
        }
    }
}

/// 保留一位小数，分母为 0 时记为 "0.0"
fn average(total: usize, count: usize) -> String {
    if count == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", total as f64 / count as f64)
}

#[derive(Debug, Serialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Serialize)]
pub struct SentimentReport {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: String,
    pub scores: SentimentScores,
}

impl SentimentReport {
    pub fn classify(text: &str, random: &RandomSource) -> Self {
        let sentiment = random
            .pick(&SENTIMENTS)
            .copied()
            .unwrap_or(Sentiment::Neutral);
        let confidence = 0.7 + random.unit() * 0.3;
        let score = |label: Sentiment| {
            if label == sentiment {
                confidence
            } else {
                random.unit() * 0.3
            }
        };

        Self {
            text: preview(text, PREVIEW_CHARS),
            sentiment,
            confidence: format!("{:.3}", confidence),
            scores: SentimentScores {
                positive: score(Sentiment::Positive),
                negative: score(Sentiment::Negative),
                neutral: score(Sentiment::Neutral),
            },
        }
    }
}
