//! Build and environment metadata endpoint.
//!
//! Reports fixed application identity plus toolchain and platform details
//! captured at build time. There is nothing to probe at run time: the binary
//! is compiled for exactly one toolchain and target OS.

use axum::Json;
use serde::Serialize;

/// Fixed application name returned by `/api/info`.
pub const APPLICATION_NAME: &str = "Rust ECS Fargate Example";

/// Toolchain version string, captured by the build script.
const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// Response body for `/api/info`.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub application: &'static str,
    pub version: &'static str,
    #[serde(rename = "rust-version")]
    pub rust_version: &'static str,
    pub os: &'static str,
}

/// `GET /api/info` - application identity and build environment.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        application: APPLICATION_NAME,
        version: env!("CARGO_PKG_VERSION"),
        rust_version: RUSTC_VERSION,
        os: std::env::consts::OS,
    })
}
