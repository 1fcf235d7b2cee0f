//! Resolution and validation over an [`EnvSource`].
//!
//! `resolve` never fails: absent or empty values take their defaults, and a
//! malformed integer is logged and replaced by its default. The `validate*`
//! functions are the fail-fast side and are independent of `resolve`.

use tracing::{debug, warn};

use crate::error::{AppError, ConfigError};

use super::keys;
use super::source::EnvSource;
use super::types::{ApiConfig, AuthConfig, FeatureFlags, ResolvedConfig};

/// Build the configuration from `source`, substituting defaults.
pub fn resolve(source: &impl EnvSource) -> ResolvedConfig {
    ResolvedConfig {
        api: ApiConfig {
            base_url: string_or(source, keys::API_BASE_URL, keys::DEFAULT_API_BASE_URL),
            version: string_or(source, keys::API_VERSION, keys::DEFAULT_API_VERSION),
            rate_limit: integer_or(source, keys::API_RATE_LIMIT, keys::DEFAULT_API_RATE_LIMIT),
            rate_limit_interval: integer_or(
                source,
                keys::API_RATE_LIMIT_INTERVAL,
                keys::DEFAULT_API_RATE_LIMIT_INTERVAL_MS,
            ),
        },
        auth: AuthConfig {
            token_key: string_or(source, keys::AUTH_TOKEN_KEY, keys::DEFAULT_AUTH_TOKEN_KEY),
        },
        features: FeatureFlags {
            dark_mode: flag(source, keys::ENABLE_DARK_MODE),
            debug_mode: flag(source, keys::ENABLE_DEBUG_MODE),
        },
    }
}

/// Fail if any required key is unset or empty.
///
/// Every missing key is reported, in [`keys::REQUIRED`] order.
pub fn validate_required(source: &impl EnvSource) -> Result<(), ConfigError> {
    let missing: Vec<&'static str> = keys::REQUIRED
        .iter()
        .copied()
        .filter(|key| source.get_non_empty(key).is_none())
        .collect();

    if missing.is_empty() {
        debug!("required settings present");
        Ok(())
    } else {
        Err(ConfigError::MissingRequired(missing))
    }
}

/// Fail on the first numeric key that is set but not a non-negative integer.
pub fn validate_numeric(source: &impl EnvSource) -> Result<(), ConfigError> {
    for key in keys::NUMERIC {
        if let Some(raw) = source.get_non_empty(key) {
            if parse_integer(&raw).is_none() {
                return Err(ConfigError::InvalidNumber { key, value: raw });
            }
        }
    }
    Ok(())
}

/// [`validate_required`] followed by [`validate_numeric`].
pub fn validate(source: &impl EnvSource) -> Result<(), ConfigError> {
    validate_required(source)?;
    validate_numeric(source)
}

/// Validate `source` strictly, then resolve it.
pub fn load_from(source: &impl EnvSource) -> Result<ResolvedConfig, AppError> {
    validate(source)?;
    Ok(resolve(source))
}

/// `true` only when `key` is exactly `"true"`.
pub fn flag(source: &impl EnvSource, key: &str) -> bool {
    source.get(key).as_deref() == Some("true")
}

fn string_or(source: &impl EnvSource, key: &str, default: &str) -> String {
    source
        .get_non_empty(key)
        .unwrap_or_else(|| default.to_string())
}

fn integer_or(source: &impl EnvSource, key: &str, default: u64) -> u64 {
    let Some(raw) = source.get_non_empty(key) else {
        return default;
    };
    parse_integer(&raw).unwrap_or_else(|| {
        warn!(key, value = %raw, default, "not a non-negative integer, using default");
        default
    })
}

/// Surrounding whitespace is ignored; signs other than `+`, fractions and
/// exponents are rejected.
fn parse_integer(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_accepts_padded_digits() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("  250 "), Some(250));
        assert_eq!(parse_integer("0"), Some(0));
    }

    #[test]
    fn parse_integer_rejects_garbage() {
        for raw in ["abc", "-1", "1.5", "1e3", "   ", "12abc"] {
            assert_eq!(parse_integer(raw), None, "expected '{raw}' to be rejected");
        }
    }
}
