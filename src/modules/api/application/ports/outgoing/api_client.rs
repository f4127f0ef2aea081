use async_trait::async_trait;
use serde_json::Value;

use crate::shared::api::ApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures that happen below the envelope boundary.
///
/// Adapters use these internally and flatten them into
/// `ApiResponse::failure` before returning; callers never see them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiClientError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid JSON response: {0}")]
    Decode(String),
}

impl<T> From<ApiClientError> for ApiResponse<T> {
    fn from(error: ApiClientError) -> Self {
        ApiResponse::failure(error.to_string())
    }
}

/// Outbound port to the portfolio JSON API.
///
/// `endpoint` is relative to the configured base URL (e.g. `/projects/42`).
/// Implementations must not fail: every outcome is an envelope.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> ApiResponse<Value>;
}
