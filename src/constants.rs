//! Central configuration defaults.
//!
//! Single source of truth for the backend URL and request tuning. To point
//! the app at a different classifier service, only edit this file or set
//! the corresponding environment variable.

/// Default classifier backend URL.
///
/// Fallback when `JOB_LENS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of contributing features requested per polarity.
pub const DEFAULT_TOP_N: u32 = 10;

/// Get the backend URL from environment or use default.
pub fn get_api_url() -> String {
    std::env::var("JOB_LENS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get the request timeout from environment or use default.
pub fn get_timeout_secs() -> u64 {
    std::env::var("JOB_LENS_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Get the explain top-N from environment or use default.
pub fn get_top_n() -> u32 {
    std::env::var("JOB_LENS_TOP_N")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_TOP_N)
}
