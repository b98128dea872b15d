//! Per-request information snapshot.
//!
//! [`InfoSnapshot`] is what the text, JSON and HTML endpoints report: a
//! fixed greeting, the local wall-clock time and the host's outbound
//! address. A new one is captured for every request.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;

use super::outbound::outbound_ip;

/// Greeting carried by every snapshot.
pub const WELCOME_MESSAGE: &str = "Not Welcome - Develop Server";

/// `strftime` pattern for [`InfoSnapshot::current_time`].
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Request-scoped server information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct InfoSnapshot {
    /// Fixed greeting.
    #[serde(rename = "WelcomeMsg")]
    pub welcome_message: String,
    /// Local time as `HH:MM:SS`.
    #[serde(rename = "Time")]
    pub current_time: String,
    /// Address the host uses for outbound traffic.
    #[serde(rename = "HostIP")]
    #[schema(value_type = String, example = "192.168.1.10")]
    pub host_outbound_ip: IpAddr,
}

impl InfoSnapshot {
    /// Builds a snapshot from explicit parts.
    #[must_use]
    pub fn new(current_time: impl Into<String>, host_outbound_ip: IpAddr) -> Self {
        Self {
            welcome_message: WELCOME_MESSAGE.to_string(),
            current_time: current_time.into(),
            host_outbound_ip,
        }
    }

    /// Captures the current time and outbound address.
    ///
    /// When no route to the public probe target exists the loopback
    /// address is reported instead.
    pub async fn capture() -> Self {
        let host_ip = match outbound_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                tracing::warn!(error = %e, "outbound address probe failed, reporting loopback");
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            }
        };
        Self::new(Local::now().format(TIME_FORMAT).to_string(), host_ip)
    }
}

impl fmt::Display for InfoSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {}}}",
            self.welcome_message, self.current_time, self.host_outbound_ip
        )
    }
}
