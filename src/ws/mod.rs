//! WebSocket layer: upgrade handling and the per-connection echo loop.
//!
//! The endpoint at `/ws/echo` sends every data frame straight back to the
//! client that sent it. Connections share nothing but [`EchoSettings`].

pub mod connection;
pub mod handler;
pub mod settings;

pub use settings::EchoSettings;
