//! Per-connection drain loop: pops pairs off the queue and writes each one
//! as a text frame until the peer goes away or the queue closes.

use crate::queue::PairDrain;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{WebSocketStream, tungstenite::Message};

/// Why a drain loop ended.
pub(crate) enum Drained {
    /// Peer closed (clean close frame, reset, or failed write). The listener
    /// should go back to accepting.
    ClientClosed,
    /// Every producer handle is gone; the server has nothing left to serve.
    QueueClosed,
}

/// Serves one accepted connection. Suspends on `pop()`, sends each pair as
/// `"<name> <value>"`, and watches the inbound half so a client disconnect
/// is noticed without having to burn a pair on a doomed write. Clean and
/// abrupt closes are treated identically: the loop just ends. A pair popped
/// right before the close races the close and is not requeued.
/// Called by: `run_server`
pub(crate) async fn drain_into(
    ws_stream: WebSocketStream<TcpStream>,
    drain: &mut PairDrain,
) -> Drained {
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    loop {
        tokio::select! {
            pair = drain.pop() => match pair {
                Some(pair) => {
                    if ws_sender
                        .send(Message::Text(pair.to_string().into()))
                        .await
                        .is_err()
                    {
                        return Drained::ClientClosed;
                    }
                }
                None => return Drained::QueueClosed,
            },
            inbound = ws_receiver.next() => match inbound {
                // Clients never speak to us; anything but a close is ignored
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => {
                    return Drained::ClientClosed;
                }
                Some(Ok(_)) => {}
            },
        }
    }
}
