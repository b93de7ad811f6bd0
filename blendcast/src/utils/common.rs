use crate::constants::{DEFAULT_PORT, DEFAULT_WS_HOST};
use chrono::Utc;
use std::fmt::{Display, Formatter};

/// Host/port pair the reporter's WebSocket server binds to.
/// The host is kept as a string so both hostnames ("localhost") and
/// literal addresses work with the resolver at bind time.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionHandle {
    host: String,
    port: u16,
}

pub type OrError<T> = Result<T, String>;

/// Creates standardized blendcast error message
#[macro_export]
macro_rules! blendcast_error {
    ($component:expr, $method:expr, $msg:expr) => {
        format!("Blendcast {} Error: {}", concat!($component, "::", $method), $msg)
    };
}

/// Creates error with cause chain
#[macro_export]
macro_rules! blendcast_error_cause {
    ($component:expr, $method:expr, $msg:expr, $cause:expr) => {
        format!("Blendcast {} Error: {}\nCaused by: {}",
            concat!($component, "::", $method), $msg, $cause)
    };
}

impl ConnectionHandle {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// WebSocket URL a client uses to reach this server.
    pub fn url(&self) -> String {
        format!("ws://{}", self)
    }
}

impl Default for ConnectionHandle {
    fn default() -> Self {
        Self::new(DEFAULT_WS_HOST, DEFAULT_PORT)
    }
}

impl Display for ConnectionHandle {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Timestamped error log for background tasks that have no caller to
/// propagate into.
pub fn log_error(component: &str, message: &str) {
    let timestamp = Utc::now().format("%H:%M:%S");
    eprintln!("{} error {}: {}", component, timestamp, message);
}
