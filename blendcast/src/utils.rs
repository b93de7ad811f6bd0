mod common;
pub use common::{ConnectionHandle, OrError, log_error};
