//! API base URL and auth header configuration.
//!
//! Resolution order for the base URL:
//! 1. `<meta name="admin-api-base" content="...">` in `index.html`
//! 2. `ADMIN_API_BASE` at compile time
//! 3. current window protocol + hostname on port 3000

use contracts::system::auth::AuthHeaderMode;

const API_BASE_META: &str = "admin-api-base";
const AUTH_HEADER_META: &str = "admin-auth-header";

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .get_attribute("content")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get the base URL for API requests, without a trailing slash.
pub fn api_base() -> String {
    if let Some(base) = meta_content(API_BASE_META) {
        return base.trim_end_matches('/').to_string();
    }
    if let Some(base) = option_env!("ADMIN_API_BASE").filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
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

/// Build a full API URL from a path starting with `/`.
///
/// ```rust,ignore
/// let url = api_url("/admin/customers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `/admin/{collection}/{id}` with the id percent-encoded.
pub fn record_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

pub fn auth_header_mode() -> AuthHeaderMode {
    meta_content(AUTH_HEADER_META)
        .map(|v| AuthHeaderMode::from_config(&v))
        .unwrap_or_default()
}
