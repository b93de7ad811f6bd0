/// Central configuration defaults for the blendcast reporter

/// Default host the reporter's WebSocket server listens on
pub const DEFAULT_WS_HOST: &str = "localhost";

/// Default port the reporter's WebSocket server listens on
pub const DEFAULT_PORT: u16 = 12345;

/// The spawning thread polls the server readiness flag at this interval
pub const READY_POLL_INTERVAL_MS: u64 = 10;
