//! Greeting endpoint reporting service status and the current time.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Fixed greeting returned by `/api/hello`.
pub const GREETING: &str = "Hello from Rust on AWS ECS Fargate!";

/// Fixed status string; the process is by definition running if it can reply.
pub const STATUS_RUNNING: &str = "running";

/// Response body for `/api/hello`. Built fresh on every call.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub status: &'static str,
}

/// `GET /api/hello` - greeting with the current UTC timestamp.
///
/// The timestamp is RFC 3339 with millisecond precision and is regenerated
/// per call; everything else in the body is constant.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: GREETING,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: STATUS_RUNNING,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn hello_reports_running_status() {
        let Json(body) = hello().await;
        assert_eq!(body.message, GREETING);
        assert_eq!(body.status, STATUS_RUNNING);
    }

    #[tokio::test]
    async fn timestamp_is_valid_rfc3339() {
        let Json(body) = hello().await;
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn timestamps_are_non_decreasing() {
        let Json(first) = hello().await;
        let Json(second) = hello().await;
        let a = DateTime::parse_from_rfc3339(&first.timestamp).unwrap();
        let b = DateTime::parse_from_rfc3339(&second.timestamp).unwrap();
        assert!(b >= a);
    }

    #[tokio::test]
    async fn consecutive_calls_differ_only_in_timestamp() {
        let Json(first) = hello().await;
        let Json(second) = hello().await;
        assert_eq!(first.message, second.message);
        assert_eq!(first.status, second.status);
    }

    #[test]
    fn body_serializes_with_exact_field_names() {
        let body = HelloResponse {
            message: GREETING,
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            status: STATUS_RUNNING,
        };
        let value = serde_json::to_value(&body).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("message"));
        assert!(obj.contains_key("timestamp"));
        assert!(obj.contains_key("status"));
    }
}
