//! Mock of the KVK API for local development and integration tests.
//!
//! Every path is answered by one echo handler. Requests without the expected
//! `apikey` header get a 401, requests mentioning `UNKNOWN_KVK_NUMBER` get a
//! 404, everything else is echoed back as JSON so tests can assert on exactly
//! what the client sent.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Registration number the mock reports as not found.
pub const UNKNOWN_KVK_NUMBER: &str = "00000000";

/// What the mock saw, returned as the response body for accepted requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub body: Option<String>,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
    };
    Router::new().fallback(echo).with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

async fn echo(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
    body: String,
) -> Response {
    let authorized = headers
        .get("apikey")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == &*state.api_key);
    if !authorized {
        tracing::debug!(path = %uri.path(), "rejecting request without valid apikey");
        return (
            StatusCode::UNAUTHORIZED,
            Json(error_body("IPD0001", "ongeldige of ontbrekende apikey")),
        )
            .into_response();
    }

    if uri.path().split('/').any(|s| s == UNKNOWN_KVK_NUMBER) {
        return (
            StatusCode::NOT_FOUND,
            Json(error_body("IPD0004", "geen gegevens gevonden")),
        )
            .into_response();
    }

    let echo = Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        body: (!body.is_empty()).then_some(body),
    };
    tracing::debug!(method = %echo.method, path = %echo.path, "echoing request");
    Json(echo).into_response()
}

fn error_body(code: &str, message: &str) -> Value {
    json!({ "fout": [{ "code": code, "omschrijving": message }] })
}
