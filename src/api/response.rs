// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
///
/// A serialization failure here is the process-wide fallback path: the
/// client gets the generic 500 instead of the intended payload.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            internal_error()
        })
}

/// Build a 200 JSON response, mapping any fault to the endpoint's fixed
/// failure message
///
/// This is the handler-local error tier: a fault never leaks detail beyond
/// the endpoint's documented message.
pub fn json_ok_or<T: Serialize>(body: &T, failure_message: &str) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message);
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        })
}

/// 404 Not Found response for unmatched routes
pub fn not_found() -> Response<Full<Bytes>> {
    fixed_json_response(
        StatusCode::NOT_FOUND,
        r#"{"error":"Endpoint not found"}"#,
    )
}

/// Generic 500 response for faults that escape the handler tier
pub fn internal_error() -> Response<Full<Bytes>> {
    fixed_json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"Something went wrong!"}"#,
    )
}

/// Error response with an endpoint-specific message
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    fixed_json_response(status, &body.to_string())
}

/// 204 preflight response for OPTIONS requests
pub fn preflight_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, POST, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

fn fixed_json_response(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(body.to_string()))))
}
