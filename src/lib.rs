//! fargate-hello: a minimal informational HTTP service.
//!
//! Exposes two JSON endpoints (`/api/hello`, `/api/info`), a plain-text
//! description (`/get`), and a liveness probe (`/health`). All handlers are
//! pure functions of constants and the current wall-clock time; the service
//! holds no state.
//!
//! The crate is a binary with a thin library surface so integration tests can
//! build the router in-process.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
