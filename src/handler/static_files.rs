//! Static file serving
//!
//! Serves the configured asset directory under its URL prefix. This is
//! deliberately plain: no range requests, no conditional caching, just
//! whole files with a content type and a cache-control header.

use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::api::response::not_found;
use crate::config::RoutesConfig;

/// Serve a request path from the static directory
pub async fn serve(path: &str, routes: &RoutesConfig) -> Response<Full<Bytes>> {
    match load_static_file(path, routes).await {
        Some((content, content_type)) => build_static_file_response(content, content_type),
        None => not_found(),
    }
}

/// Resolve and read a static file, with directory-traversal protection
///
/// Returns None for anything that does not resolve to a readable file
/// inside the static directory.
async fn load_static_file(path: &str, routes: &RoutesConfig) -> Option<(Vec<u8>, &'static str)> {
    let relative = strip_prefix(path, &routes.static_prefix);
    let file_path = Path::new(&routes.static_dir).join(sanitize(relative));

    // The canonical path must stay inside the static directory
    let static_dir_canonical = Path::new(&routes.static_dir).canonicalize().ok()?;
    let mut file_path_canonical = file_path.canonicalize().ok()?;
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        return None;
    }

    if file_path_canonical.is_dir() {
        file_path_canonical = resolve_index(&file_path_canonical, &routes.index_files)?;
    }

    let content = fs::read(&file_path_canonical).await.ok()?;
    let content_type = content_type_for(&file_path_canonical);
    Some((content, content_type))
}

/// Strip the mount prefix from the request path
fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix)
        .map_or("", |rest| rest.trim_start_matches('/'))
}

/// Drop path components that could escape the static directory
fn sanitize(relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .collect()
}

/// Find the first index file that exists in a directory
fn resolve_index(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    index_files
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Determine content type from file extension
fn content_type_for(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "glb" => "model/gltf-binary",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

fn build_static_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
