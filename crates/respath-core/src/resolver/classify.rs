//! One-shot classification of a raw path into the shape that selects its rule.
//!
//! Precedence differs per storage mode and variant; each `classify_*`
//! function lists the checks in the order they win.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResourcePathResolver;
use crate::url_model::{
    contains_marker, has_https_scheme, host_of, ASSETS_MARKER, ASSET_HOST_PREFIX,
    LEGACY_PORT_MARKER, ORG_CONTENT_MARKER,
};

/// Which backend serves resources, from `ResolverConfig::blob_enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Storage {
    Legacy,
    Blob,
}

/// Full asset or its thumbnail. Thumbnails follow a separate rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Full,
    Thumbnail,
}

/// Host family of an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// The CDN serving blob storage.
    Cdn,
    /// The host of the configured legacy base URL.
    Legacy,
    /// A legacy `https://assets...` host.
    AssetHost,
    Other,
}

/// Classification of a raw path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "shape", content = "host")]
pub enum PathShape {
    /// Absolute URL.
    Absolute(HostKind),
    /// Carries the `:10000` legacy port marker.
    LegacyPort,
    /// Contains the configured org code.
    OrgScoped,
    /// Contains `assets`.
    Assets,
    /// Starts with `/`.
    RootRelative,
    /// Already carries the configured legacy org path.
    LegacyRewritten,
    /// Carries the raw `org-content` marker.
    LegacyMarker,
    /// Scheme-less `www` host.
    WwwHost,
    /// Nothing recognisable; the default append rule applies.
    Bare,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HostKind::Cdn => "cdn",
            HostKind::Legacy => "legacy",
            HostKind::AssetHost => "asset-host",
            HostKind::Other => "other",
        };
        f.write_str(s)
    }
}

impl fmt::Display for PathShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathShape::Absolute(host) => write!(f, "absolute({host})"),
            PathShape::LegacyPort => f.write_str("legacy-port"),
            PathShape::OrgScoped => f.write_str("org-scoped"),
            PathShape::Assets => f.write_str("assets"),
            PathShape::RootRelative => f.write_str("root-relative"),
            PathShape::LegacyRewritten => f.write_str("legacy-rewritten"),
            PathShape::LegacyMarker => f.write_str("legacy-marker"),
            PathShape::WwwHost => f.write_str("www-host"),
            PathShape::Bare => f.write_str("bare"),
        }
    }
}

impl ResourcePathResolver {
    /// Classifies `path` (separators already normalised) for the configured
    /// storage mode.
    pub fn classify(&self, path: &str, variant: Variant) -> PathShape {
        self.classify_for(path, self.storage(), variant)
    }

    pub(crate) fn classify_for(&self, path: &str, storage: Storage, variant: Variant) -> PathShape {
        if self.is_cdn(path) {
            return PathShape::Absolute(HostKind::Cdn);
        }
        match (storage, variant) {
            (Storage::Legacy, Variant::Full) => self.classify_legacy_full(path),
            (Storage::Legacy, Variant::Thumbnail) => self.classify_legacy_thumbnail(path),
            (Storage::Blob, Variant::Full) => self.classify_blob_full(path),
            (Storage::Blob, Variant::Thumbnail) => self.classify_blob_thumbnail(path),
        }
    }

    fn host_kind(&self, path: &str) -> HostKind {
        if self.is_cdn(path) {
            HostKind::Cdn
        } else if self.is_legacy_host(path) {
            HostKind::Legacy
        } else if path.contains(ASSET_HOST_PREFIX) {
            HostKind::AssetHost
        } else {
            HostKind::Other
        }
    }

    fn is_legacy_host(&self, path: &str) -> bool {
        host_of(path).is_some_and(|h| h.eq_ignore_ascii_case(&self.legacy_host))
    }

    fn classify_legacy_full(&self, path: &str) -> PathShape {
        if path.contains(LEGACY_PORT_MARKER) {
            PathShape::LegacyPort
        } else if self.is_legacy_host(path) {
            self.legacy_host_shape(path)
        } else if path.contains(ASSET_HOST_PREFIX) {
            PathShape::Absolute(HostKind::AssetHost)
        } else {
            self.classify_legacy_relative(path)
        }
    }

    fn classify_legacy_thumbnail(&self, path: &str) -> PathShape {
        if path.contains("https://") {
            PathShape::Absolute(self.host_kind(path))
        } else if self.is_legacy_host(path) {
            self.legacy_host_shape(path)
        } else {
            self.classify_legacy_relative(path)
        }
    }

    /// URL on the legacy host: marker substitution still applies, anything
    /// else is already resolved.
    fn legacy_host_shape(&self, path: &str) -> PathShape {
        if contains_marker(path, &self.config.org_content_path) {
            PathShape::LegacyRewritten
        } else if path.contains(ORG_CONTENT_MARKER) {
            PathShape::LegacyMarker
        } else {
            PathShape::Absolute(HostKind::Legacy)
        }
    }

    /// Tail shared by both legacy rule sets.
    fn classify_legacy_relative(&self, path: &str) -> PathShape {
        if path.contains(ASSETS_MARKER) {
            PathShape::Assets
        } else if path.starts_with('/') {
            PathShape::RootRelative
        } else if contains_marker(path, &self.config.org_content_path) {
            PathShape::LegacyRewritten
        } else if path.contains(ORG_CONTENT_MARKER) {
            PathShape::LegacyMarker
        } else {
            PathShape::Bare
        }
    }

    fn classify_blob_full(&self, path: &str) -> PathShape {
        if path.contains(LEGACY_PORT_MARKER) {
            PathShape::LegacyPort
        } else if has_https_scheme(path) {
            // Org code is looked up only after the host moves to the CDN.
            PathShape::Absolute(self.host_kind(path))
        } else if contains_marker(path, &self.config.org_code) {
            PathShape::OrgScoped
        } else if path.starts_with('/') {
            PathShape::RootRelative
        } else if contains_marker(path, &self.config.org_content_path) {
            PathShape::LegacyRewritten
        } else if path.contains(ORG_CONTENT_MARKER) {
            PathShape::LegacyMarker
        } else if path.contains("www") {
            PathShape::WwwHost
        } else {
            PathShape::Bare
        }
    }

    fn classify_blob_thumbnail(&self, path: &str) -> PathShape {
        if path.contains("https://") {
            PathShape::Absolute(self.host_kind(path))
        } else if path.contains(ASSETS_MARKER) {
            PathShape::Assets
        } else if contains_marker(path, &self.config.org_code) {
            PathShape::OrgScoped
        } else if contains_marker(path, &self.base_url) {
            // Legacy URL on a non-https base: only marker rewrites apply.
            if contains_marker(path, &self.config.org_content_path) {
                PathShape::LegacyRewritten
            } else if path.contains(LEGACY_PORT_MARKER) {
                PathShape::LegacyPort
            } else if path.contains(ORG_CONTENT_MARKER) {
                PathShape::LegacyMarker
            } else {
                PathShape::Absolute(HostKind::Legacy)
            }
        } else if path.starts_with('/') {
            PathShape::RootRelative
        } else {
            PathShape::Bare
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;

    fn resolver(blob_enabled: bool) -> ResourcePathResolver {
        ResourcePathResolver::new(ResolverConfig {
            base_url: "https://lxp.example.com".to_string(),
            org_content_path: "lxp-o".to_string(),
            blob_path: "/blob".to_string(),
            blob_path_alt: "/blob/".to_string(),
            org_code: "ORG1".to_string(),
            blob_enabled,
            ..ResolverConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn cdn_wins_in_every_mode() {
        let cdn = "https://content.gogetempowered.com/ORG1/a.png";
        for blob in [false, true] {
            for variant in [Variant::Full, Variant::Thumbnail] {
                assert_eq!(
                    resolver(blob).classify(cdn, variant),
                    PathShape::Absolute(HostKind::Cdn)
                );
            }
        }
    }

    #[test]
    fn legacy_full_precedence() {
        let r = resolver(false);
        let c = |p| r.classify(p, Variant::Full);
        assert_eq!(c("https://lxp.example.com:10000/x.png"), PathShape::LegacyPort);
        assert_eq!(c("https://lxp.example.com/x.png"), PathShape::Absolute(HostKind::Legacy));
        assert_eq!(c("https://lxp.example.com/org-content/x.png"), PathShape::LegacyMarker);
        assert_eq!(c("https://lxp.example.com/lxp-o/x.png"), PathShape::LegacyRewritten);
        assert_eq!(
            c("https://assets.example.com/org-content/x.png"),
            PathShape::Absolute(HostKind::AssetHost)
        );
        assert_eq!(c("/assets/x.png"), PathShape::Assets);
        assert_eq!(c("/img/x.png"), PathShape::RootRelative);
        assert_eq!(c("lxp-o/x.png"), PathShape::LegacyRewritten);
        assert_eq!(c("org-content/x.png"), PathShape::LegacyMarker);
        assert_eq!(c("img/x.png"), PathShape::Bare);
    }

    #[test]
    fn legacy_thumbnail_treats_any_https_as_final() {
        let r = resolver(false);
        assert_eq!(
            r.classify("https://elsewhere.example.org/x.png", Variant::Thumbnail),
            PathShape::Absolute(HostKind::Other)
        );
        assert_eq!(
            r.classify("https://elsewhere.example.org/x.png", Variant::Full),
            PathShape::Bare
        );
    }

    #[test]
    fn legacy_thumbnail_http_on_legacy_host_keeps_marker_rules() {
        let r = resolver(false);
        let c = |p| r.classify(p, Variant::Thumbnail);
        assert_eq!(c("http://lxp.example.com/org-content/x.png"), PathShape::LegacyMarker);
        assert_eq!(c("http://lxp.example.com/x.png"), PathShape::Absolute(HostKind::Legacy));
        assert_eq!(
            c("https://lxp.example.com/org-content/x.png"),
            PathShape::Absolute(HostKind::Legacy)
        );
    }

    #[test]
    fn blob_full_precedence() {
        let r = resolver(true);
        let c = |p| r.classify(p, Variant::Full);
        assert_eq!(c("https://lxp.example.com/ORG1/x.png"), PathShape::Absolute(HostKind::Legacy));
        assert_eq!(c("http://lxp.example.com/ORG1/x.png"), PathShape::OrgScoped);
        assert_eq!(c("media/ORG1/x.png"), PathShape::OrgScoped);
        assert_eq!(c("https://lxp.example.com/x.png"), PathShape::Absolute(HostKind::Legacy));
        assert_eq!(c("/img/x.png"), PathShape::RootRelative);
        assert_eq!(c("org-content/x.png"), PathShape::LegacyMarker);
        assert_eq!(c("www.example.com/x.png"), PathShape::WwwHost);
        assert_eq!(c("img/x.png"), PathShape::Bare);
    }

    #[test]
    fn blob_thumbnail_precedence() {
        let r = resolver(true);
        let c = |p| r.classify(p, Variant::Thumbnail);
        assert_eq!(c("https://lxp.example.com/x.png"), PathShape::Absolute(HostKind::Legacy));
        assert_eq!(c("ORG1/assets/x.png"), PathShape::Assets);
        assert_eq!(c("x/ORG1/y.png"), PathShape::OrgScoped);
        assert_eq!(c("/img/x.png"), PathShape::RootRelative);
        assert_eq!(c("org-content/x.png"), PathShape::Bare);
    }

    #[test]
    fn empty_org_code_never_scopes() {
        let r = ResourcePathResolver::new(ResolverConfig {
            base_url: "https://lxp.example.com".to_string(),
            blob_enabled: true,
            ..ResolverConfig::default()
        })
        .unwrap();
        assert_eq!(r.classify("img/x.png", Variant::Full), PathShape::Bare);
    }

    #[test]
    fn shape_display() {
        assert_eq!(PathShape::Absolute(HostKind::AssetHost).to_string(), "absolute(asset-host)");
        assert_eq!(PathShape::Bare.to_string(), "bare");
    }
}
