use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error};

use crate::modules::api::application::ports::outgoing::{ApiClient, ApiClientError, HttpMethod};
use crate::shared::api::{ApiResponse, GENERIC_FAILURE};
use crate::shared::config::ClientConfig;

/// `ApiClient` backed by a shared `reqwest::Client`.
///
/// ## Normalization rules
/// - 2xx: `data` is the body's `data` field, or the whole body when that field
///   is absent or null. An empty body is a success without data.
/// - non-2xx: the server's `message`, then `error` (string or `{message}`),
///   then a generic failure text.
/// - transport or JSON failures: the failure text of the underlying error.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: Client,
    base_url: String,
}

impl ReqwestApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiClientError> {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<(u16, Vec<u8>), ApiClientError> {
        let mut request = self
            .client
            .request(to_reqwest_method(method), self.url(endpoint))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if method != HttpMethod::Get {
            if let Some(body) = body {
                let bytes = serde_json::to_vec(&body)
                    .map_err(|e| ApiClientError::Decode(e.to_string()))?;
                request = request.body(bytes);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;

        Ok((status, bytes.to_vec()))
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> ApiResponse<Value> {
        debug!("{} {}", method, endpoint);

        let response = match self.send(method, endpoint, body, token).await {
            Ok((status, bytes)) => normalize_response(status, &bytes),
            Err(e) => ApiResponse::from(e),
        };

        if !response.success {
            error!(
                "API Error: {} {} failed: {}",
                method,
                endpoint,
                response.error.as_deref().unwrap_or(GENERIC_FAILURE)
            );
        }

        response
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Turn a raw HTTP status + body into the uniform envelope.
pub(crate) fn normalize_response(status: u16, body: &[u8]) -> ApiResponse<Value> {
    let is_ok = (200..300).contains(&status);

    if body.iter().all(u8::is_ascii_whitespace) {
        return if is_ok {
            ApiResponse::success(None, None)
        } else {
            ApiClientError::Status {
                status,
                message: GENERIC_FAILURE.to_string(),
            }
            .into()
        };
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if !is_ok => {
            return ApiClientError::Status {
                status,
                message: GENERIC_FAILURE.to_string(),
            }
            .into()
        }
        Err(e) => return ApiClientError::Decode(e.to_string()).into(),
    };

    if !is_ok {
        let message = server_error_message(&value).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return ApiClientError::Status { status, message }.into();
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    let data = match value.get("data") {
        Some(data) if !data.is_null() => data.clone(),
        _ => value,
    };

    ApiResponse::success(Some(data), message)
}

fn server_error_message(value: &Value) -> Option<String> {
    if let Some(message) = value.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    match value.get("error") {
        Some(Value::String(error)) => Some(error.clone()),
        Some(Value::Object(error)) => error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
