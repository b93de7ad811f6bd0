use crate::utils::OrError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Externally supplied parameter snapshot: name → arbitrary value.
/// `serde_json::Map` with `preserve_order` keeps insertion order, which is
/// the delivery order downstream.
pub type ParamMap = serde_json::Map<String, serde_json::Value>;

/// One named parameter value on its way to the client. Moves through the
/// queue and is consumed exactly once.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pair {
    pub name: String,
    pub value: f64,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for Pair {
    /// Renders the wire frame: name and value, space-separated.
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.value)
    }
}

/// Capability interface for parameter reporters. A reporter accepts a
/// snapshot, keeps whatever it can deliver, and returns the enqueued pairs.
/// Alternative transports implement this independently of `WsReporter`.
pub trait Reporter {
    fn send(&self, snapshot: &ParamMap) -> OrError<Vec<Pair>>;
}
