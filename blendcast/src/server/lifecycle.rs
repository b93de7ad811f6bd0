//! Listening-socket lifecycle: bind, signal readiness, then accept and serve
//! one connection at a time for the life of the process.

use super::connection::{Drained, drain_into};
use crate::blendcast_error_cause;
use crate::queue::PairDrain;
use crate::utils::{ConnectionHandle, OrError, log_error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;

/// Runs the reporter's server loop on the current (dedicated) runtime.
/// Binds the listener, flips `ready` so the spawning thread can proceed,
/// then accepts connections sequentially: the queue-drain pattern only has
/// one meaningful consumer, so there is no per-client fanout here.
/// A failed accept or handshake is logged and does not stop the loop;
/// only a bind failure (fatal, nothing could ever connect) or queue
/// closure (reporter dropped) ends it.
/// Called by: `WsReporter::ensure_started` (via the background thread)
pub(crate) async fn run_server(
    connection: ConnectionHandle,
    mut drain: PairDrain,
    ready: Arc<AtomicBool>,
) -> OrError<()> {
    let listener = TcpListener::bind(connection.to_string())
        .await
        .map_err(|e| {
            blendcast_error_cause!(
                "server::lifecycle",
                "run_server",
                &format!("failed to bind listener at {}", connection),
                e
            )
        })?;
    ready.store(true, Ordering::Release);

    loop {
        let (tcp_stream, _) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                log_error("run_server", &format!("accept failed: {}", e));
                continue;
            }
        };
        let ws_stream = match accept_async(tcp_stream).await {
            Ok(ws_stream) => ws_stream,
            Err(e) => {
                log_error("run_server", &format!("WebSocket handshake failed: {}", e));
                continue;
            }
        };
        match drain_into(ws_stream, &mut drain).await {
            // Back to listening; pairs pushed meanwhile stay buffered
            Drained::ClientClosed => continue,
            Drained::QueueClosed => return Ok(()),
        }
    }
}
