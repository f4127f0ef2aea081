use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

const API_PREFIX: &str = "/api";

/// One request as the fake backend received it.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Canned {
    status: u16,
    body: String,
}

#[derive(Default)]
struct BackendState {
    routes: Mutex<HashMap<String, Canned>>,
    received: Mutex<Vec<ReceivedRequest>>,
}

/// Real HTTP server on an ephemeral port that answers from canned responses.
///
/// Routes are keyed by `"METHOD /path"` with the `/api` prefix stripped.
/// Unknown routes answer 404 with an envelope carrying `"Route not found"`.
pub struct FakeBackend {
    pub base_url: String,
    state: web::Data<BackendState>,
}

impl FakeBackend {
    /// Must be called from inside an actix/tokio runtime.
    pub async fn start() -> Self {
        let state = web::Data::new(BackendState::default());
        let app_state = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            state,
        }
    }

    /// Answer `key` with `status` and a raw body.
    pub fn route_raw(&self, key: &str, status: u16, body: &str) {
        self.state
            .routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key.to_string(),
                Canned {
                    status,
                    body: body.to_string(),
                },
            );
    }

    pub fn route(&self, key: &str, status: u16, body: Value) {
        self.route_raw(key, status, &body.to_string());
    }

    /// 200 with `{ success: true, data }`.
    pub fn route_ok(&self, key: &str, data: Value) {
        self.route(key, 200, json!({ "success": true, "data": data }));
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state
            .received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn received_for(&self, key: &str) -> Vec<ReceivedRequest> {
        self.received()
            .into_iter()
            .filter(|r| format!("{} {}", r.method, r.path) == key)
            .collect()
    }
}

async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<BackendState>,
) -> HttpResponse {
    let path = req
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(req.path())
        .to_string();
    let method = req.method().to_string();
    let key = format!("{} {}", method, path);

    state
        .received
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(ReceivedRequest {
            method,
            path,
            authorization: req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&body).ok(),
        });

    let canned = state
        .routes
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();

    match canned {
        Some(Canned { status, body }) => {
            HttpResponse::build(StatusCode::from_u16(status).unwrap_or(StatusCode::OK))
                .content_type("application/json")
                .body(body)
        }
        None => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Route not found",
        })),
    }
}
