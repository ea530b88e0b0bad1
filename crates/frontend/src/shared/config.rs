//! Runtime configuration for the frontend
//!
//! Values are baked in at build time (Trunk passes the environment through
//! to `option_env!`). The config is built once in `App` and handed to view
//! models explicitly.

/// Request timeout used when `BACKEND_TIMEOUT_MS` is unset or invalid
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash; empty means same origin
    pub backend_base_url: String,
    /// Upper bound for a single request, in milliseconds
    pub request_timeout_ms: u32,
}

impl AppConfig {
    pub fn new(backend_base_url: impl Into<String>) -> Self {
        Self {
            backend_base_url: normalize_base_url(&backend_base_url.into()),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u32) -> Self {
        if timeout_ms > 0 {
            self.request_timeout_ms = timeout_ms;
        }
        self
    }

    /// Build the config from `BACKEND_URL` and `BACKEND_TIMEOUT_MS`
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BACKEND_URL"), option_env!("BACKEND_TIMEOUT_MS"))
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let timeout_ms = timeout_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        Self::new(base_url.unwrap_or_default()).with_request_timeout_ms(timeout_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new("")
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
