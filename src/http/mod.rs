//! HTTP server startup and lifecycle.
//!
//! The service runs plain HTTP: in the target deployment TLS terminates at
//! the load balancer. Included:
//! - Graceful shutdown on SIGTERM/SIGINT (ECS sends SIGTERM on scale-down)

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
