//! Error types for resolver construction.

use thiserror::Error;

/// Raised when a [`ResourcePathResolver`](crate::resolver::ResourcePathResolver)
/// is built from configuration that cannot produce URLs.
///
/// Resolution itself never fails; every problem surfaces here, before the
/// first path is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    /// A required field was left empty (typically a freshly generated config file).
    #[error("resolver configuration is missing `{field}`; set it before resolving paths")]
    Unconfigured { field: &'static str },

    /// A base URL field does not parse as an absolute URL with a host.
    #[error("`{field}` must be an absolute URL with a host, got {value:?}")]
    InvalidBaseUrl { field: &'static str, value: String },
}
