use serde::Serialize;

pub const JOKES: [&str; 4] = [
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "Why do Java developers wear glasses? Because they can't C#!",
    "A SQL query walks into a bar, walks up to two tables and asks, \"Can I join you?\"",
    "Why do programmers always mix up Halloween and Christmas? Because Oct 31 equals Dec 25!",
];

/// (text, author)
pub const QUOTES: [(&str, &str); 4] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
];

#[derive(Debug, Serialize)]
pub struct Joke {
    pub joke: &'static str,
    pub category: &'static str,
    pub safe: bool,
    pub language: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NewsArticle {
    pub title: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    pub published_at: String,
    pub url: &'static str,
    pub image: &'static str,
}
