use std::collections::BTreeMap;
use std::str::FromStr;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde_json::Value;
use url::form_urlencoded;

use crate::error::AppError;

/// 请求参数：合并查询串与请求体（JSON 或表单），请求体中的同名字段优先
#[derive(Debug, Default, Clone)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    #[cfg(test)]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// 空字符串视为未提供
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn require(&self, name: &str, message: &str) -> Result<&str, AppError> {
        self.get(name)
            .ok_or_else(|| AppError::Validation(message.to_string()))
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// 解析正整数参数，缺省时使用默认值
    pub fn positive_or<T>(&self, name: &str, default: T) -> Result<T, AppError>
    where
        T: FromStr + PartialOrd + Default,
    {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .ok()
                .filter(|value| *value > T::default())
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "Parameter \"{}\" must be a positive integer",
                        name
                    ))
                }),
        }
    }

    fn merge_json(&mut self, body: Value) {
        // 非对象的 JSON 请求体不携带参数
        let Value::Object(fields) = body else {
            return;
        };
        for (name, value) in fields {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            self.0.insert(name, text);
        }
    }

    fn merge_form(&mut self, body: &[u8]) {
        for (name, value) in form_urlencoded::parse(body) {
            self.0.insert(name.into_owned(), value.into_owned());
        }
    }
}

impl<S> FromRequest<S> for Params
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = Params::default();
        if let Some(query) = req.uri().query() {
            params.merge_form(query.as_bytes());
        }

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::Validation(rejection.body_text())
            }
        })?;
        if body.is_empty() {
            return Ok(params);
        }

        if content_type.starts_with("application/json") {
            let value: Value = serde_json::from_slice(&body)
                .map_err(|_| AppError::Validation("Invalid JSON body".to_string()))?;
            params.merge_json(value);
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            params.merge_form(&body);
        }

        Ok(params)
    }
}
