pub mod constants;
mod core;
pub mod queue;
mod server;
pub mod utils;

// Re-export core types at the top level for easy access
pub use core::common::{Pair, ParamMap, Reporter};
pub use core::flatten::flatten;
pub use core::reporter::WsReporter;
pub use utils::ConnectionHandle;
