//! Integration tests driving the real router over HTTP.
//!
//! Each test binds the application to an ephemeral port in-process and issues
//! requests with reqwest. Tests run in parallel since the server supports
//! concurrent requests.
use std::fs;

use hearth::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_STATIC};
use hearth::routes::create_router;
use hearth::state::AppState;
use hearth::templates::init_templates;

/// Start the application on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let tera = init_templates().expect("templates should load from crate root");
    let state = AppState::new(tera);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{}", addr)
}

fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn health_returns_ok() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn home_serves_the_static_page() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert!(content_type(&response).starts_with("text/html"));

    // The template has no substitution variables, so the response body is
    // byte-equal to the file on disk.
    let expected = fs::read_to_string("templates/home.html").unwrap();
    assert_eq!(response.text().await.unwrap(), expected);
}

#[tokio::test]
async fn home_sets_cache_control() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    let cache_control = response
        .headers()
        .get(reqwest::header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    assert_eq!(cache_control, CACHE_CONTROL_HOME);
}

#[tokio::test]
async fn health_is_not_cached() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert!(response
        .headers()
        .get(reqwest::header::CACHE_CONTROL)
        .is_none());
}

#[tokio::test]
async fn static_assets_are_served_with_long_cache() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/static/css/style.css", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let cache_control = response
        .headers()
        .get(reqwest::header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(cache_control, CACHE_CONTROL_STATIC);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let first = client
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = client
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(first, second);

    let first = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(first, "ok");
    assert_eq!(second, "ok");
}

#[tokio::test]
async fn concurrent_health_checks_do_not_interfere() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let client = client.clone();
            let url = format!("{}/health", base);
            tokio::spawn(async move {
                let response = client.get(url).send().await.unwrap();
                (response.status().as_u16(), response.text().await.unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, "ok");
    }
}

#[tokio::test]
async fn unmapped_route_returns_not_found() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/does-not-exist", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
