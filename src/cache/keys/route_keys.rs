use url::form_urlencoded;

/// 路由名，作为缓存键的命名空间
pub const ANIME_SEARCH: &str = "anime_search";
pub const ANIME_INFO: &str = "anime_info";
pub const ANIME_EPISODES: &str = "anime_episodes";
pub const ANIME_CHARACTERS: &str = "anime_characters";
pub const ANIME_RANDOM: &str = "anime_random";
pub const YT_SEARCH: &str = "ytsearch";

/// 生成缓存键：`路由名:参数`，参数按名称排序后做表单编码
pub fn route_key(route: &str, params: &[(&str, &str)]) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in sorted {
        serializer.append_pair(name, value);
    }
    let encoded = serializer.finish();

    if encoded.is_empty() {
        route.to_string()
    } else {
        format!("{}:{}", route, encoded)
    }
}

pub fn anime_search_key(query: &str, limit: u32) -> String {
    route_key(ANIME_SEARCH, &[("q", query), ("limit", &limit.to_string())])
}

pub fn anime_info_key(id: &str) -> String {
    route_key(ANIME_INFO, &[("id", id)])
}

pub fn anime_episodes_key(id: &str) -> String {
    route_key(ANIME_EPISODES, &[("id", id)])
}

pub fn anime_characters_key(id: &str) -> String {
    route_key(ANIME_CHARACTERS, &[("id", id)])
}

pub fn anime_random_key() -> String {
    route_key(ANIME_RANDOM, &[])
}

pub fn ytsearch_key(query: &str, limit: u32) -> String {
    route_key(YT_SEARCH, &[("q", query), ("limit", &limit.to_string())])
}
