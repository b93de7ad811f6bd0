//! Unbounded FIFO bridging the synchronous producer and the async sender loop.
//! `PairQueue` is the push side (any thread, never blocks); `PairDrain` is the
//! pop side, owned by the server's event loop.

use crate::Pair;
use crate::blendcast_error;
use crate::utils::OrError;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Creates the queue halves. Called once per reporter; the drain half moves
/// into the background server thread on startup.
pub fn pair_queue() -> (PairQueue, PairDrain) {
    let (tx, rx) = unbounded_channel();
    (PairQueue { tx }, PairDrain { rx })
}

/// Producer half. Cheap to use from any thread; pushes never block and are
/// delivered to the drain in push order.
pub struct PairQueue {
    tx: UnboundedSender<Pair>,
}

impl PairQueue {
    /// Enqueues one pair. Unbounded: always succeeds immediately unless the
    /// drain half is gone, which only happens when the server thread died.
    /// Error: Drain dropped → propagates to `WsReporter::send`.
    pub fn push(&self, pair: Pair) -> OrError<()> {
        self.tx
            .send(pair)
            .map_err(|_| blendcast_error!("queue::PairQueue", "push", "drain side closed"))
    }
}

/// Consumer half. Held by the connection-serving loop; survives across
/// connections so pairs buffered while no client is attached are delivered
/// to the next one.
pub struct PairDrain {
    rx: UnboundedReceiver<Pair>,
}

impl PairDrain {
    /// Suspends until a pair is available, strict FIFO. Returns `None` once
    /// every `PairQueue` handle is dropped and the buffer is empty.
    pub async fn pop(&mut self) -> Option<Pair> {
        self.rx.recv().await
    }
}
