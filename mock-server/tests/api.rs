use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body.to_string())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_returns_body_verbatim() {
    let resp = app()
        .oneshot(request("POST", "/echo", r#"{"name":"widget"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], br#"{"name":"widget"}"#);
}

#[tokio::test]
async fn echo_of_empty_body_is_empty() {
    let resp = app().oneshot(request("POST", "/echo", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

// --- status ---

#[tokio::test]
async fn status_route_echoes_body_with_requested_code() {
    let resp = app()
        .oneshot(request("POST", "/status/503", "kaboom"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"kaboom");
}

#[tokio::test]
async fn status_route_accepts_any_method() {
    let resp = app()
        .oneshot(request("DELETE", "/status/410", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::GONE);
}

#[tokio::test]
async fn status_route_rejects_out_of_range_code() {
    let resp = app()
        .oneshot(request("GET", "/status/9999", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- headers ---

#[tokio::test]
async fn headers_route_reports_request_headers() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/headers")
                .header("x-api-key", "secret1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers: std::collections::HashMap<String, String> = body_json(resp).await;
    assert_eq!(headers.get("x-api-key").map(String::as_str), Some("secret1"));
}

// --- items ---

#[tokio::test]
async fn create_item_returns_fixed_id() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items")
                .header(http::header::AUTHORIZATION, "Bearer X")
                .body(r#"{"name":"widget"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let item: Item = body_json(resp).await;
    assert_eq!(item.id, 42);
    assert_eq!(item.name, "widget");
}

#[tokio::test]
async fn create_item_without_bearer_auth_is_401() {
    let resp = app()
        .oneshot(request("POST", "/items", r#"{"name":"widget"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_item_with_malformed_body_is_422() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items")
                .header(http::header::AUTHORIZATION, "Bearer X")
                .body(r#"{"label":1}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- not-json ---

#[tokio::test]
async fn not_json_route_returns_non_json_body() {
    let resp = app()
        .oneshot(request("GET", "/not-json", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"not-json");
}
