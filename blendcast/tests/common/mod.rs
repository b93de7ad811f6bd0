use blendcast::ParamMap;
use serde_json::Value;
use std::net::TcpListener;

/// Picks a free loopback port by binding port 0 and releasing it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind an ephemeral port");
    listener
        .local_addr()
        .expect("bound listener should have an address")
        .port()
}

/// Builds a snapshot from a `json!` object literal.
pub fn snapshot(value: Value) -> ParamMap {
    value
        .as_object()
        .expect("test snapshots should be JSON objects")
        .clone()
}
