mod handler;
mod model;

pub use handler::{anime_characters, anime_episodes, anime_info, anime_random, anime_search};
