use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, HeaderName, StatusCode},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", post(echo))
        .route("/status/{code}", any(respond_with_status))
        .route("/headers", get(report_headers))
        .route("/items", post(create_item))
        .route("/not-json", get(not_json))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Echo the raw request body back as a 200 JSON response.
async fn echo(body: Bytes) -> ([(HeaderName, &'static str); 1], Bytes) {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

/// Respond with the requested status code, echoing the request body.
async fn respond_with_status(
    Path(code): Path<u16>,
    body: Bytes,
) -> Result<(StatusCode, Bytes), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, body))
}

/// Report the received request headers as a JSON object.
async fn report_headers(headers: HeaderMap) -> Json<HashMap<String, String>> {
    let map = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(map)
}

/// Accept an item when a bearer token is present, answering with a fixed id.
///
/// The body is parsed by hand rather than via the `Json` extractor so the
/// route works regardless of the request's content-type header.
async fn create_item(headers: HeaderMap, body: Bytes) -> Result<Json<Item>, StatusCode> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer "));
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let input: CreateItem =
        serde_json::from_slice(&body).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok(Json(Item {
        id: 42,
        name: input.name,
    }))
}

/// A 200 response whose body is not valid JSON.
async fn not_json() -> &'static str {
    "not-json"
}
