use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::api::application::ports::outgoing::{ApiClient, HttpMethod};
use crate::shared::api::ApiResponse;

/// What the code under test sent.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<Value>,
    pub token: Option<String>,
}

/// `ApiClient` that answers from a script and records every call.
///
/// Responses are queued per `(method, endpoint)`; the last queued response
/// keeps answering once the queue is down to one. Anything unscripted gets
/// a network-style failure, so an empty script behaves like an offline backend.
#[derive(Default)]
pub struct ScriptedApiClient {
    script: Mutex<HashMap<(HttpMethod, String), VecDeque<ApiResponse<Value>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

pub const OFFLINE_ERROR: &str = "error sending request: connection refused";

impl ScriptedApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: HttpMethod, endpoint: &str, response: ApiResponse<Value>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, endpoint.to_string()))
            .or_default()
            .push_back(response);
    }

    pub fn respond_ok(&self, method: HttpMethod, endpoint: &str, data: Value) {
        self.respond(method, endpoint, ApiResponse::success(Some(data), None));
    }

    pub fn respond_err(&self, method: HttpMethod, endpoint: &str, error: &str) {
        self.respond(method, endpoint, ApiResponse::failure(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn calls_to(&self, method: HttpMethod, endpoint: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == method && c.endpoint == endpoint)
            .count()
    }
}

#[async_trait]
impl ApiClient for ScriptedApiClient {
    async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> ApiResponse<Value> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                method,
                endpoint: endpoint.to_string(),
                body,
                token: token.map(str::to_string),
            });

        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        match script.get_mut(&(method, endpoint.to_string())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(|| ApiResponse::failure(OFFLINE_ERROR)),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| ApiResponse::failure(OFFLINE_ERROR)),
            None => ApiResponse::failure(OFFLINE_ERROR),
        }
    }
}

/// `ApiClient` whose requests never complete; for exercising cancellation.
#[derive(Default)]
pub struct HangingApiClient;

#[async_trait]
impl ApiClient for HangingApiClient {
    async fn request(
        &self,
        _method: HttpMethod,
        _endpoint: &str,
        _body: Option<Value>,
        _token: Option<&str>,
    ) -> ApiResponse<Value> {
        std::future::pending().await
    }
}
