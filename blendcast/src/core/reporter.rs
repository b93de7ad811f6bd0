//! WebSocket reporter: the synchronous `send` entry point plus the
//! spawn-once background thread that owns the server's event loop.
//! `send` never touches the network; it flattens the snapshot, enqueues the
//! pairs, and returns. All socket I/O happens on the worker thread.

use super::common::{Pair, ParamMap, Reporter};
use super::flatten::flatten;
use crate::constants::{DEFAULT_PORT, DEFAULT_WS_HOST, READY_POLL_INTERVAL_MS};
use crate::queue::{PairDrain, PairQueue, pair_queue};
use crate::server::run_server;
use crate::utils::{ConnectionHandle, OrError, log_error};
use crate::{blendcast_error, blendcast_error_cause};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to the spawned server thread. The `ready` flag is written once by
/// the background event loop after its listener is bound.
struct ReporterWorker {
    ready: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// State that changes when the server starts: the queue's drain half waits
/// here until it moves into the worker thread, exactly once.
struct WorkerSlot {
    drain: Option<PairDrain>,
    worker: Option<ReporterWorker>,
}

/// WebSocket Reporter for Resonite.
/// Resonite does not run a WebSocket server, rather it connects out to an
/// existing one, so this is a server, not a client. The server starts
/// lazily on the first `send` and lives for the rest of the process.
pub struct WsReporter {
    connection: ConnectionHandle,
    queue: PairQueue,
    slot: Mutex<WorkerSlot>,
}

impl WsReporter {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let (queue, drain) = pair_queue();
        Self {
            connection: ConnectionHandle::new(host, port),
            queue,
            slot: Mutex::new(WorkerSlot {
                drain: Some(drain),
                worker: None,
            }),
        }
    }

    pub fn connection(&self) -> &ConnectionHandle {
        &self.connection
    }

    /// Whether the background event loop is up with its listener bound.
    pub fn started(&self) -> bool {
        let slot = self.slot.lock().unwrap();
        slot.worker
            .as_ref()
            .map(|worker| worker.ready.load(Ordering::Acquire) && !worker.handle.is_finished())
            .unwrap_or(false)
    }

    /// Starts the server exactly once; later calls are no-ops.
    /// Spawns a dedicated thread running a single-threaded tokio runtime so
    /// the accept loop's async primitives are all constructed on the
    /// runtime that will drive them, then block-waits (short poll) until
    /// that loop reports its listener bound.
    /// Error: runtime build or bind fails → thread exits early, surfaced
    /// here; propagates to `send`.
    pub fn ensure_started(&self) -> OrError<()> {
        let mut slot = self.slot.lock().unwrap();
        if slot.worker.is_some() {
            return Ok(());
        }

        let drain = slot.drain.take().ok_or_else(|| {
            blendcast_error!("core::WsReporter", "ensure_started", "queue drain already taken")
        })?;
        let ready = Arc::new(AtomicBool::new(false));
        let loop_ready = ready.clone();
        let connection = self.connection.clone();

        let handle = thread::Builder::new()
            .name("ws-reporter".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        log_error("WsReporter", &format!("failed to build reporter runtime: {}", e));
                        return;
                    }
                };
                if let Err(e) = runtime.block_on(run_server(connection, drain, loop_ready)) {
                    log_error("WsReporter", &e);
                }
            })
            .map_err(|e| {
                blendcast_error_cause!(
                    "core::WsReporter",
                    "ensure_started",
                    "failed to spawn reporter thread",
                    e
                )
            })?;

        // Wait for the listener to bind before trusting delivery. A thread
        // that finishes without flipping the flag failed to start (the bind
        // error is already logged by the thread itself).
        while !ready.load(Ordering::Acquire) {
            if handle.is_finished() {
                let _ = handle.join();
                return Err(blendcast_error!(
                    "core::WsReporter",
                    "ensure_started",
                    "server thread exited before its listener came up"
                ));
            }
            thread::sleep(Duration::from_millis(READY_POLL_INTERVAL_MS));
        }

        slot.worker = Some(ReporterWorker { ready, handle });
        Ok(())
    }
}

impl Default for WsReporter {
    fn default() -> Self {
        Self::new(DEFAULT_WS_HOST, DEFAULT_PORT)
    }
}

impl Reporter for WsReporter {
    /// Flattens the snapshot and enqueues every float pair, in snapshot
    /// order, returning what was enqueued. Starts the server on first use.
    /// Never blocks on the network: pairs pushed while no client is
    /// connected simply buffer in the queue.
    /// Error: only server startup failure; well-formed snapshots never err.
    fn send(&self, snapshot: &ParamMap) -> OrError<Vec<Pair>> {
        self.ensure_started()?;

        let pairs = flatten(snapshot);
        for pair in &pairs {
            self.queue.push(pair.clone())?;
        }
        Ok(pairs)
    }
}
