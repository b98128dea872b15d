//! Tests against a real listener: WebSocket echo, redirects and
//! concurrent slow requests.

#![allow(clippy::panic, clippy::expect_used, clippy::indexing_slicing)]

mod common;

use std::time::{Duration, Instant};

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use common::{app, spawn_server};

async fn connect_echo(
    addr: std::net::SocketAddr,
) -> tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>
{
    let (ws, _) = connect_async(format!("ws://{addr}/ws/echo"))
        .await
        .expect("websocket handshake should succeed");
    ws
}

async fn next_data(
    ws: &mut tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
) -> Message {
    loop {
        match ws.next().await {
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            Some(Ok(msg)) => return msg,
            other => panic!("expected a frame, got {other:?}"),
        }
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn websocket_echoes_frames_in_order() {
    let addr = spawn_server(app()).await;
    let mut ws = connect_echo(addr).await;

    for payload in ["a", "b", "c"] {
        ws.send(Message::text(payload)).await.expect("send");
    }
    for payload in ["a", "b", "c"] {
        assert_eq!(next_data(&mut ws).await, Message::text(payload));
    }

    ws.send(Message::binary(vec![0u8, 159, 146, 150]))
        .await
        .expect("send");
    assert_eq!(
        next_data(&mut ws).await,
        Message::binary(vec![0u8, 159, 146, 150])
    );
}

#[tokio::test]
async fn closing_one_connection_leaves_others_running() {
    let addr = spawn_server(app()).await;
    let mut first = connect_echo(addr).await;
    let mut second = connect_echo(addr).await;

    first.send(Message::text("one")).await.expect("send");
    assert_eq!(next_data(&mut first).await, Message::text("one"));
    first.close(None).await.expect("close");

    second.send(Message::text("two")).await.expect("send");
    assert_eq!(next_data(&mut second).await, Message::text("two"));

    // New connections are still accepted.
    let mut third = connect_echo(addr).await;
    third.send(Message::text("three")).await.expect("send");
    assert_eq!(next_data(&mut third).await, Message::text("three"));
}

#[tokio::test]
async fn plain_get_on_echo_endpoint_is_rejected() {
    let addr = spawn_server(app()).await;
    let resp = client()
        .get(format!("http://{addr}/ws/echo"))
        .send()
        .await
        .expect("request should complete");
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn redirect_reaches_client_as_found() {
    let addr = spawn_server(app()).await;
    let resp = client()
        .get(format!("http://{addr}/redirect"))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(resp.status(), reqwest::StatusCode::FOUND);
    assert_eq!(
        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("https://www.example.com")
    );
}

#[tokio::test]
async fn slow_request_does_not_block_others() {
    let addr = spawn_server(app()).await;
    let http = client();

    let slow = {
        let http = http.clone();
        tokio::spawn(async move {
            let start = Instant::now();
            let resp = http
                .get(format!("http://{addr}/exectime/1500ms"))
                .send()
                .await
                .expect("request should complete");
            let status = resp.status();
            let body = resp.text().await.expect("body");
            (status, body, start.elapsed())
        })
    };

    // Let the slow request reach its handler first.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let start = Instant::now();
    let resp = http
        .get(format!("http://{addr}/status/503"))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(resp.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.text().await.expect("body"), "503 Service Unavailable");
    assert!(start.elapsed() < Duration::from_millis(1000));

    let (status, body, elapsed) = slow.await.expect("slow task");
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "got duration 1.5s");
    assert!(elapsed >= Duration::from_millis(1500));
}
