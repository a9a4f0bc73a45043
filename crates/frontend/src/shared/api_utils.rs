//! Helpers for addressing the REST backend.

/// Base URL of the backend. Same host the app was served from, fixed
/// port 8080. Empty outside a browser (tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Full URL for an API path like `/api/v1/suppliers`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
