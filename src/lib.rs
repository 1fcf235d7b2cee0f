// Library root: exposes the configuration core for integration tests and the
// frontend host. The binary entry point is src/main.rs.

pub mod config;
pub mod error;
pub mod logger;
