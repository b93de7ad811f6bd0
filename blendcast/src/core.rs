pub mod common;
pub mod flatten;
pub mod reporter;
