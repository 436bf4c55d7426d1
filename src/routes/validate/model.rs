use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";
const MIN_PASSWORD_LEN: usize = 8;
const MASKED_PASSWORD: &str = "••••••••";

#[derive(Debug, Serialize)]
pub struct EmailCheck {
    pub email: String,
    pub is_valid: bool,
    pub domain: Option<String>,
    pub local_part: String,
}

impl EmailCheck {
    pub fn inspect(email: &str) -> Self {
        let mut parts = email.split('@');
        let local_part = parts.next().unwrap_or_default().to_string();
        let domain = parts.next().map(str::to_string);
        Self {
            email: email.to_string(),
            is_valid: EMAIL_PATTERN.is_match(email),
            domain,
            local_part,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn run(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            numbers: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn score(&self) -> u8 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.numbers,
            self.special,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    #[serde(rename = "very strong")]
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3 => Strength::Medium,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PasswordReport {
    pub password: &'static str,
    pub is_valid: bool,
    pub strength: Strength,
    pub strength_score: u8,
    pub checks: PasswordChecks,
}

impl PasswordReport {
    pub fn assess(password: &str) -> Self {
        let checks = PasswordChecks::run(password);
        let score = checks.score();
        Self {
            // 原文不回显
            password: MASKED_PASSWORD,
            is_valid: checks.length && checks.lowercase && checks.uppercase && checks.numbers,
            strength: Strength::from_score(score),
            strength_score: score,
            checks,
        }
    }
}
