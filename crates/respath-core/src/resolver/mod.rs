//! Resolution of raw content paths into downloadable resource URLs.
//!
//! A raw path is normalised, classified once into a [`PathShape`], and the
//! rule for that shape is applied. The rule set depends on the storage mode
//! (legacy server or CDN blob storage) and on the [`Variant`] requested.
//! Resolution never fails: unrecognised shapes fall through to the default
//! append rule and are flagged with a [`ResolutionWarning`].

mod classify;
mod full;
mod thumbnail;

pub use classify::{HostKind, PathShape, Storage, Variant};

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::config::{ResolverConfig, DEFAULT_CONTENT_BASE_URL};
use crate::error::ResolverError;
use crate::url_model::{sanitize_resource_string, trim_trailing_slash};

/// Why a resolution may deserve a second look. Never changes the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionWarning {
    /// The input was empty or whitespace.
    EmptyInput,
    /// No rule matched; the path was appended to the base URL as-is.
    UnrecognizedShape,
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::EmptyInput => f.write_str("empty input"),
            ResolutionWarning::UnrecognizedShape => {
                f.write_str("unrecognized path shape; default append rule applied")
            }
        }
    }
}

/// Outcome of resolving one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub input: String,
    pub url: String,
    pub variant: Variant,
    pub shape: PathShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<ResolutionWarning>,
}

impl Resolution {
    /// `rule_shape` is the shape whose rule produced `url`; it differs from
    /// `shape` only when a legacy port marker was rewritten first.
    fn new(
        input: &str,
        url: String,
        variant: Variant,
        shape: PathShape,
        rule_shape: PathShape,
    ) -> Self {
        let warning = if input.trim().is_empty() {
            Some(ResolutionWarning::EmptyInput)
        } else if rule_shape == PathShape::Bare {
            Some(ResolutionWarning::UnrecognizedShape)
        } else {
            None
        };
        Self {
            input: input.to_string(),
            url,
            variant,
            shape,
            warning,
        }
    }
}

/// Anything that turns raw content paths into resource URLs.
pub trait Resolver {
    fn resolve_detailed(&self, raw: &str, variant: Variant) -> Resolution;

    fn resolve(&self, raw: &str, variant: Variant) -> String {
        self.resolve_detailed(raw, variant).url
    }
}

/// Resolver over an injected, validated [`ResolverConfig`].
#[derive(Debug, Clone)]
pub struct ResourcePathResolver {
    config: ResolverConfig,
    /// Legacy base URL without trailing `/`.
    base_url: String,
    base: Url,
    legacy_host: String,
    /// CDN base URL without trailing `/`.
    content_base: String,
    cdn_host: String,
}

impl ResourcePathResolver {
    /// Validates `config` and builds a resolver.
    ///
    /// Fails when `base_url` or `content_base_url` is empty or is not an
    /// absolute URL with a host, so an unconfigured resolver cannot exist.
    pub fn new(config: ResolverConfig) -> Result<Self, ResolverError> {
        let (base_url, base, legacy_host) = parse_base("base_url", &config.base_url)?;
        let (content_base, _, cdn_host) =
            parse_base("content_base_url", &config.content_base_url)?;
        tracing::debug!(
            "resolver ready: legacy_host={} cdn_host={} blob_enabled={}",
            legacy_host,
            cdn_host,
            config.blob_enabled
        );
        Ok(Self {
            config,
            base_url,
            base,
            legacy_host,
            content_base,
            cdn_host,
        })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn storage(&self) -> Storage {
        if self.config.blob_enabled {
            Storage::Blob
        } else {
            Storage::Legacy
        }
    }

    /// Full-asset path for a value straight from the content service.
    /// `None` yields an empty string.
    pub fn resource_path(&self, raw: Option<&str>) -> String {
        match raw {
            Some(raw) => self.resolve(&sanitize_resource_string(raw), Variant::Full),
            None => String::new(),
        }
    }

    /// [`resource_path`](Self::resource_path) parsed as a URL.
    pub fn resource_url(&self, raw: Option<&str>) -> Option<Url> {
        let raw = raw?;
        Url::parse(&self.resource_path(Some(raw))).ok()
    }

    /// Thumbnail path for a value straight from the content service.
    pub fn thumbnail_path(&self, raw: &str) -> String {
        self.resolve(&sanitize_resource_string(raw), Variant::Thumbnail)
    }

    /// [`thumbnail_path`](Self::thumbnail_path) parsed as a URL.
    pub fn thumbnail_url(&self, raw: &str) -> Option<Url> {
        Url::parse(&self.thumbnail_path(raw)).ok()
    }

    /// True for the configured CDN host and the canonical content host.
    fn is_cdn(&self, path: &str) -> bool {
        path.contains(&self.cdn_host) || path.contains(canonical_cdn_host())
    }
}

impl Resolver for ResourcePathResolver {
    fn resolve_detailed(&self, raw: &str, variant: Variant) -> Resolution {
        let resolution = match variant {
            Variant::Full => full::resolve(self, raw),
            Variant::Thumbnail => thumbnail::resolve(self, raw),
        };
        tracing::trace!(
            "resolved {:?} -> {} ({}, {:?})",
            raw,
            resolution.url,
            resolution.shape,
            variant
        );
        resolution
    }
}

fn canonical_cdn_host() -> &'static str {
    DEFAULT_CONTENT_BASE_URL.trim_start_matches("https://")
}

fn parse_base(field: &'static str, value: &str) -> Result<(String, Url, String), ResolverError> {
    let trimmed = trim_trailing_slash(value.trim());
    if trimmed.is_empty() {
        return Err(ResolverError::Unconfigured { field });
    }
    let invalid = || ResolverError::InvalidBaseUrl {
        field,
        value: value.to_string(),
    };
    let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
    let host = parsed.host_str().ok_or_else(invalid)?.to_string();
    Ok((trimmed.to_string(), parsed, host))
}
