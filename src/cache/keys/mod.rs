/// 缓存键模块
/// 提供各路由的缓存键生成函数
pub mod route_keys;

pub use route_keys::{
    ANIME_CHARACTERS, ANIME_EPISODES, ANIME_INFO, ANIME_RANDOM, ANIME_SEARCH, YT_SEARCH,
    anime_characters_key, anime_episodes_key, anime_info_key, anime_random_key,
    anime_search_key, route_key, ytsearch_key,
};
