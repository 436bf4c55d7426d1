use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::infrastructure::upstream::UpstreamError;
use crate::result::{ApiResult, error_to_api_response};

/// 处理请求过程中的所有失败，最终都转换成统一的错误信封
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 缺少必填参数或参数格式错误
    #[error("{0}")]
    Validation(String),

    /// 请求体超过大小限制
    #[error("Request body too large")]
    PayloadTooLarge,

    /// 超出限流配额
    #[error("Too many requests, please try again later.")]
    RateLimited { retry_after_ms: u64 },

    /// 上游请求失败（传输错误、超时、非 2xx 或响应结构不符）
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("API endpoint not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::Internal(_) | AppError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::RateLimited { retry_after_ms } => {
                axum::Json(ApiResult::rate_limited(self.to_string(), *retry_after_ms))
            }
            AppError::Serialization(err) => {
                tracing::error!(error = %err, "failed to serialize response payload");
                error_to_api_response("Internal server error")
            }
            _ => error_to_api_response(self.to_string()),
        };

        (status, body).into_response()
    }
}
