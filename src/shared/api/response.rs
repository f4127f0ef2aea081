// src/shared/api/response.rs
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GENERIC_FAILURE: &str = "API request failed";

/// Uniform envelope every remote call resolves to.
///
/// Failures never escape the remote layer as `Err`; they land here with
/// `success == false` and a human-readable `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Error text for display, falling back to `default` when the server gave none.
    pub fn error_or(&self, default: &str) -> String {
        self.error.clone().unwrap_or_else(|| default.to_string())
    }
}

impl ApiResponse<Value> {
    /// Decode `data` into a typed payload.
    ///
    /// A payload that does not match `T` turns the whole envelope into a failure,
    /// so callers only ever see `success == true` together with well-formed data.
    pub fn decode<T: DeserializeOwned>(self) -> ApiResponse<T> {
        if !self.success {
            return ApiResponse {
                success: false,
                data: None,
                message: self.message,
                error: self.error,
            };
        }

        match self.data {
            None | Some(Value::Null) => ApiResponse::success(None, self.message),
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(data) => ApiResponse::success(Some(data), self.message),
                Err(e) => ApiResponse::failure(format!("Invalid response payload: {e}")),
            },
        }
    }
}
