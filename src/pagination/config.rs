//! Page size limits applied by the normalizer.

use serde::{Deserialize, Serialize};

/// Smallest page size served when the request asks for less (or nothing).
pub const DEFAULT_MIN_SIZE: i64 = 10;

/// Largest page size served when no maximum is configured.
pub const DEFAULT_MAX_SIZE: i64 = 50;

fn default_min_size() -> i64 {
    DEFAULT_MIN_SIZE
}

/// Pagination limits, fixed when the [`Normalizer`](super::Normalizer) is built.
///
/// `max_size` of `0` means "use [`DEFAULT_MAX_SIZE`]".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Minimum number of rows per page
    #[serde(default = "default_min_size")]
    pub min_size: i64,

    /// Maximum number of rows per page (0 = default maximum)
    #[serde(default)]
    pub max_size: i64,

    /// Enable verbose query logging for every listing
    #[serde(default)]
    pub debug: bool,
}

impl PaginationConfig {
    pub fn new(min_size: i64, max_size: i64) -> Self {
        Self {
            min_size,
            max_size,
            debug: false,
        }
    }

    /// Minimum page size, never below 1.
    pub fn min_size(&self) -> i64 {
        self.min_size.max(1)
    }

    /// Maximum page size after resolving the `0 = default` convention.
    pub fn effective_max_size(&self) -> i64 {
        effective_max_size(self.max_size)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: 0,
            debug: false,
        }
    }
}

/// Resolves a configured maximum: positive values are kept, anything else
/// falls back to [`DEFAULT_MAX_SIZE`].
pub fn effective_max_size(max_size: i64) -> i64 {
    if max_size > 0 { max_size } else { DEFAULT_MAX_SIZE }
}
