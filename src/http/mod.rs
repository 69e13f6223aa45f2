//! HTTP server startup and lifecycle.
//!
//! The server binds a TCP listener, serves the router, and drains in-flight
//! connections on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
