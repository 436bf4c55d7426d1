use serde::Serialize;

use crate::utils::RandomSource;

const PROFILE_PIC: &str = "https://picsum.photos/150/150";

#[derive(Debug, Serialize)]
pub struct InstagramProfile {
    pub username: String,
    pub full_name: &'static str,
    pub bio: &'static str,
    pub followers: u64,
    pub following: u64,
    pub posts: u64,
    pub is_verified: bool,
    pub profile_pic: &'static str,
    pub is_private: bool,
}

impl InstagramProfile {
    pub fn generate(username: &str, random: &RandomSource) -> Self {
        Self {
            username: username.to_string(),
            full_name: "Demo User",
            bio: "This is a demo bio for Instagram profile",
            followers: random.below(100_000),
            following: random.below(1_000),
            posts: random.below(100),
            is_verified: random.unit() > 0.5,
            profile_pic: PROFILE_PIC,
            is_private: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TiktokProfile {
    pub username: String,
    pub display_name: &'static str,
    pub bio: &'static str,
    pub followers: u64,
    pub following: u64,
    pub likes: u64,
    pub videos: u64,
    pub is_verified: bool,
    pub profile_pic: &'static str,
}

impl TiktokProfile {
    pub fn generate(username: &str, random: &RandomSource) -> Self {
        Self {
            username: username.to_string(),
            display_name: "Demo TikTok User",
            bio: "Demo TikTok bio 🎵",
            followers: random.below(1_000_000),
            following: random.below(100),
            likes: random.below(10_000_000),
            videos: random.below(100),
            is_verified: random.unit() > 0.7,
            profile_pic: PROFILE_PIC,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TwitterProfile {
    pub username: String,
    pub display_name: &'static str,
    pub bio: &'static str,
    pub followers: u64,
    pub following: u64,
    pub tweets: u64,
    pub likes: u64,
    pub is_verified: bool,
    pub profile_pic: &'static str,
    pub location: &'static str,
    pub website: &'static str,
}

impl TwitterProfile {
    pub fn generate(username: &str, random: &RandomSource) -> Self {
        Self {
            username: username.to_string(),
            display_name: "Demo Twitter User",
            bio: "This is a demo Twitter bio. #Demo #API",
            followers: random.below(50_000),
            following: random.below(1_000),
            tweets: random.below(10_000),
            likes: random.below(50_000),
            is_verified: random.unit() > 0.6,
            profile_pic: PROFILE_PIC,
            location: "Demo City",
            website: "demo-website.com",
        }
    }
}
