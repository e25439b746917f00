//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: preflight and body-size checks,
//! route matching, CORS/Server header application and access logging.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response, StatusCode, Version};

use crate::api::query::parse_list_params;
use crate::api::{handlers, response};
use crate::config::AppState;
use crate::handler::static_files;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: hyper::body::Body,
{
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let version = version_str(req.version());
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let mut response = if method == Method::OPTIONS {
        response::preflight_response(state.config.http.enable_cors)
    } else if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        resp
    } else {
        dispatch(req, &state, &method, &path, query.as_deref()).await
    };

    apply_common_headers(&mut response, &state);

    if state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed)
    {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_len(&response);
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
///
/// Everything that does not match a route, whatever the method, gets the
/// fixed JSON 404.
async fn dispatch<B>(
    req: Request<B>,
    state: &Arc<AppState>,
    method: &Method,
    path: &str,
    query: Option<&str>,
) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
{
    let now = Utc::now();

    match (method, path) {
        (&Method::GET, "/health") => handlers::handle_health(now),
        (&Method::GET, "/content/gifs") => {
            handlers::handle_list_gifs(state, &parse_list_params(query)).await
        }
        (&Method::GET, "/content/ar-hints") => {
            handlers::handle_list_ar_hints(state, &parse_list_params(query)).await
        }
        (&Method::GET, "/content/premium-updates") => {
            handlers::handle_premium_updates(state, now).await
        }
        (&Method::POST, "/admin/gifs") => match read_body(req).await {
            Some(body) => handlers::handle_add_gif(state, &body, now).await,
            None => response::error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to add GIF",
            ),
        },
        (&Method::POST, "/admin/ar-hints") => match read_body(req).await {
            Some(body) => handlers::handle_add_ar_hint(state, &body, now).await,
            None => response::error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to add AR hint",
            ),
        },
        (&Method::GET, "/admin/stats") => handlers::handle_stats(state).await,
        (&Method::GET, p) if is_static_path(p, &state.config.routes.static_prefix) => {
            static_files::serve(p, &state.config.routes).await
        }
        _ => response::not_found(),
    }
}

/// Collect the request body into memory
async fn read_body<B>(req: Request<B>) -> Option<Bytes>
where
    B: hyper::body::Body,
{
    match req.collect().await {
        Ok(collected) => Some(collected.to_bytes()),
        Err(_) => {
            logger::log_warning("Failed to read request body");
            None
        }
    }
}

fn is_static_path(path: &str, prefix: &str) -> bool {
    path == prefix || path.starts_with(&format!("{prefix}/"))
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::error_response(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Request entity too large",
                ))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Add the Server header and, when enabled, the CORS allow-origin header
fn apply_common_headers(response: &mut Response<Full<Bytes>>, state: &Arc<AppState>) {
    if let Ok(name) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert("Server", name);
    }

    if state.config.http.enable_cors {
        response
            .headers_mut()
            .insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    }
}

fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

const fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
