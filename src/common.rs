use url::form_urlencoded;

/// 按字符截断，避免切断多字节字符
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 摘要：截取前 `max_chars` 个字符并追加省略号
pub fn excerpt(text: &str, max_chars: usize) -> String {
    format!("{}...", truncate_chars(text, max_chars))
}

/// 仅在超长时追加省略号
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        excerpt(text, max_chars)
    } else {
        text.to_string()
    }
}

/// 对单个 URL 组件做百分号编码，空格编码为 `%20`，可用于路径段和查询值
pub fn encode_component(value: &str) -> String {
    // 字面量 `+` 已被编码为 `%2B`，剩下的 `+` 都来自空格
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
