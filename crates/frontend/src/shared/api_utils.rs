//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and query strings.

use serde::Serialize;

/// Base URL baked in at build time (`EDU_API_BASE=https://api.example.com trunk build`)
const BUILD_API_BASE: Option<&str> = option_env!("EDU_API_BASE");

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `EDU_API_BASE` set at compile time
/// 2. The current window location with port 3000
///
/// Trailing slashes are trimmed so that `api_url` can always join with one `/`.
/// Returns an empty string if neither is available (native tests).
pub fn api_base() -> String {
    if let Some(base) = BUILD_API_BASE {
        return normalize_base(base);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an API path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    let base = normalize_base(base);
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base
    } else {
        format!("{}/{}", base, path)
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/subjects");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Append an encoded query string to a path
///
/// Fields that serialize to nothing (e.g. `None` with `skip_serializing_if`)
/// are dropped; if nothing is left the path is returned unchanged.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => {
            let sep = if path.contains('?') { '&' } else { '?' };
            format!("{}{}{}", path, sep, qs)
        }
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("Failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}
