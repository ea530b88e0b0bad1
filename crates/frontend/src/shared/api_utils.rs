//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs from [`AppConfig`].

use super::config::AppConfig;

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The resource path (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config, "/barang");
/// ```
pub fn api_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", config.backend_base_url, path)
}

/// Resolve an asset path returned by the backend (e.g. `gambar_url`)
///
/// Absolute URLs are returned unchanged; anything else is joined with the
/// backend base URL.
pub fn resolve_asset_url(config: &AppConfig, path: &str) -> String {
    const ABSOLUTE_PREFIXES: [&str; 4] = ["http://", "https://", "data:", "blob:"];
    if ABSOLUTE_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return path.to_string();
    }
    if path.starts_with('/') || config.backend_base_url.is_empty() {
        format!("{}{}", config.backend_base_url, path)
    } else {
        format!("{}/{}", config.backend_base_url, path)
    }
}
