mod connection;
mod lifecycle;

pub(crate) use lifecycle::run_server;
