//! Shared helpers for integration tests.

#![allow(dead_code, clippy::expect_used)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use tower::ServiceExt;

use devprobe_server::app_state::AppState;
use devprobe_server::build_app;
use devprobe_server::config::ServerConfig;

/// Router with default configuration and the given template path.
pub fn app_with_template(template_path: &Path) -> Router {
    let config = ServerConfig {
        template_path: template_path.to_path_buf(),
        ..ServerConfig::default()
    };
    build_app(AppState::new(&config))
}

/// Router whose template path does not exist.
pub fn app() -> Router {
    app_with_template(Path::new("/nonexistent/devprobe/index.html"))
}

/// Sends `GET uri` through the router and collects the response.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    send(app, Method::GET, uri).await
}

/// Sends `method uri` through the router and collects the response.
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = String::from_utf8(bytes.to_vec()).expect("body should be UTF-8");
    (status, headers, body)
}

/// Writes `contents` to a per-process temporary file and returns its path.
pub fn write_temp_template(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "devprobe-{}-{name}.html",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("temp template should be writable");
    path
}

/// Serves `app` on an ephemeral loopback port.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind should succeed");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Asserts that `s` is a `HH:MM:SS` time.
pub fn assert_clock_time(s: &str) {
    assert_eq!(s.len(), 8, "unexpected time {s:?}");
    assert!(
        chrono::NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok(),
        "unexpected time {s:?}"
    );
}
