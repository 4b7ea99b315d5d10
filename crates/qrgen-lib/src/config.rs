//! Process-level configuration for QR generation.
//!
//! The only tunable is the default square size used when a request omits
//! `size`. It is resolved once from the environment and then passed by
//! reference into the handler.
//!
//! # Environment Variables
//!
//! - `DEFAULT_SIZE`: default size in pixels (optional, integer)

use std::ops::RangeInclusive;

use thiserror::Error;

/// Size used when neither the request nor the environment provides one.
pub const DEFAULT_SIZE: i64 = 200;

/// Smallest accepted size in pixels.
pub const MIN_SIZE: i64 = 50;

/// Largest accepted size in pixels.
pub const MAX_SIZE: i64 = 1000;

/// Environment variable overriding [`DEFAULT_SIZE`].
pub const DEFAULT_SIZE_ENV: &str = "DEFAULT_SIZE";

/// Error raised while resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `DEFAULT_SIZE` was set to something that is not an integer.
    #[error("DEFAULT_SIZE must be an integer, got '{value}'")]
    InvalidDefaultSize { value: String },
}

/// Immutable configuration shared by every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrConfig {
    /// Size applied when the request does not specify one.
    pub default_size: i64,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
        }
    }
}

impl QrConfig {
    /// Accepted size range, inclusive on both ends.
    pub const SIZE_RANGE: RangeInclusive<i64> = MIN_SIZE..=MAX_SIZE;

    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(DEFAULT_SIZE_ENV).ok();
        Self::resolve(value.as_deref())
    }

    /// Resolve configuration from the raw `DEFAULT_SIZE` value.
    ///
    /// Unset, empty and whitespace-only values yield the hard default. Any
    /// other value must parse as an integer.
    pub fn resolve(default_size: Option<&str>) -> Result<Self, ConfigError> {
        match default_size.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(Self::default()),
            Some(value) => value
                .parse::<i64>()
                .map(Self::with_default_size)
                .map_err(|_| ConfigError::InvalidDefaultSize {
                    value: value.to_string(),
                }),
        }
    }

    /// Create configuration with an explicit default size.
    pub fn with_default_size(default_size: i64) -> Self {
        Self { default_size }
    }

    /// Whether the configured default would pass request validation.
    ///
    /// Out-of-range defaults are accepted at startup; requests that rely on
    /// them are rejected with the size error.
    pub fn default_size_in_range(&self) -> bool {
        Self::SIZE_RANGE.contains(&self.default_size)
    }
}
