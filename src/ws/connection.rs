//! WebSocket echo loop.
//!
//! Each connection runs in its own task: every text or binary frame read
//! from the client is written back unchanged. The loop ends on a close
//! frame, end of stream, or the first read or write error.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{Sink, SinkExt, Stream, StreamExt};

/// Runs the echo loop for a single WebSocket connection.
pub async fn run_echo(socket: WebSocket) {
    let (ws_tx, ws_rx) = socket.split();
    let echoed = echo_frames(ws_rx, ws_tx).await;
    tracing::debug!(echoed, "ws connection closed");
}

/// Copies data frames from `rx` back into `tx` until either side stops.
///
/// Ping and pong frames are answered by the transport and skipped here.
/// Returns the number of frames echoed.
pub async fn echo_frames<R, T, E>(mut rx: R, mut tx: T) -> usize
where
    R: Stream<Item = Result<Message, E>> + Unpin,
    T: Sink<Message> + Unpin,
    T::Error: std::fmt::Display,
    E: std::fmt::Display,
{
    let mut echoed = 0;
    while let Some(msg) = rx.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "ws read failed");
                break;
            }
        };

        match msg {
            Message::Text(ref text) => tracing::debug!(payload = %text.as_str(), "recv"),
            Message::Binary(ref bytes) => tracing::debug!(len = bytes.len(), "recv binary"),
            Message::Close(_) => break,
            Message::Ping(_) | Message::Pong(_) => continue,
        }

        if let Err(e) = tx.send(msg).await {
            tracing::debug!(error = %e, "ws write failed");
            break;
        }
        echoed += 1;
    }
    echoed
}
