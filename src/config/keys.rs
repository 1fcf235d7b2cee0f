//! Recognised environment keys and their defaults.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `VITE_API_BASE_URL` | `api.base_url` (required) | `http://localhost:8000` |
//! | `VITE_API_VERSION` | `api.version` (required) | `/api/v1` |
//! | `VITE_API_RATE_LIMIT` | `api.rate_limit` | `100` |
//! | `VITE_API_RATE_LIMIT_INTERVAL` | `api.rate_limit_interval` (ms) | `60000` |
//! | `VITE_AUTH_TOKEN_KEY` | `auth.token_key` (required) | `documind_auth_token` |
//! | `VITE_ENABLE_DARK_MODE` | `features.dark_mode` | `false` |
//! | `VITE_ENABLE_DEBUG_MODE` | `features.debug_mode` | `false` |

pub const API_BASE_URL: &str = "VITE_API_BASE_URL";
pub const API_VERSION: &str = "VITE_API_VERSION";
pub const API_RATE_LIMIT: &str = "VITE_API_RATE_LIMIT";
pub const API_RATE_LIMIT_INTERVAL: &str = "VITE_API_RATE_LIMIT_INTERVAL";
pub const AUTH_TOKEN_KEY: &str = "VITE_AUTH_TOKEN_KEY";
pub const ENABLE_DARK_MODE: &str = "VITE_ENABLE_DARK_MODE";
pub const ENABLE_DEBUG_MODE: &str = "VITE_ENABLE_DEBUG_MODE";

/// Keys whose absence blocks startup. Order is the order reported on failure.
pub const REQUIRED: [&str; 3] = [API_BASE_URL, API_VERSION, AUTH_TOKEN_KEY];

/// Keys parsed as non-negative integers.
pub const NUMERIC: [&str; 2] = [API_RATE_LIMIT, API_RATE_LIMIT_INTERVAL];

/// Only keys carrying this prefix are picked up from env files.
pub const PREFIX: &str = "VITE_";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_VERSION: &str = "/api/v1";
pub const DEFAULT_API_RATE_LIMIT: u64 = 100;
pub const DEFAULT_API_RATE_LIMIT_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_AUTH_TOKEN_KEY: &str = "documind_auth_token";
