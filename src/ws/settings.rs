//! Upgrade settings shared by every echo connection.

use axum::extract::ws::WebSocketUpgrade;

/// Largest message accepted on the echo endpoint.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 << 20;

/// Largest single frame accepted on the echo endpoint.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 16 << 20;

/// WebSocket upgrade configuration, built once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoSettings {
    /// Maximum reassembled message size in bytes.
    pub max_message_size: usize,
    /// Maximum frame size in bytes.
    pub max_frame_size: usize,
}

impl Default for EchoSettings {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

impl EchoSettings {
    /// Applies these limits to a pending upgrade.
    #[must_use]
    pub fn apply(&self, upgrade: WebSocketUpgrade) -> WebSocketUpgrade {
        upgrade
            .max_message_size(self.max_message_size)
            .max_frame_size(self.max_frame_size)
    }
}
