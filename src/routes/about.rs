//! Plain-text description of the deployment demo.

/// One-line blurb served at `GET /get`.
pub const ABOUT_TEXT: &str =
    "Demonstration of deploying a Rust web service on AWS ECS with Fargate";

/// `GET /get` - static plain-text description of the service.
pub async fn about() -> &'static str {
    ABOUT_TEXT
}
