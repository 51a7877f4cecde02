//! Full-asset rules.

use super::{HostKind, PathShape, Resolution, ResourcePathResolver, Storage, Variant};
use crate::url_model::{
    after_authority, after_last, contains_marker, normalize_separators, rebase_onto,
    replace_host, LEGACY_PORT_MARKER, ORG_CONTENT_MARKER,
};

pub(super) fn resolve(r: &ResourcePathResolver, raw: &str) -> Resolution {
    let path = normalize_separators(raw);
    let storage = r.storage();
    let shape = r.classify_for(&path, storage, Variant::Full);

    let (url, rule_shape) = match shape {
        PathShape::Absolute(HostKind::Cdn) => (path, shape),
        PathShape::LegacyPort => {
            let rewritten = path.replace(LEGACY_PORT_MARKER, &r.config.legacy_port_fragment);
            let inner = r.classify_for(&rewritten, storage, Variant::Full);
            (apply(r, storage, inner, rewritten), inner)
        }
        _ => (apply(r, storage, shape, path), shape),
    };

    // Rules splice configured fragments in; those may carry backslashes too.
    let url = normalize_separators(&url);
    Resolution::new(raw, url, Variant::Full, shape, rule_shape)
}

fn apply(r: &ResourcePathResolver, storage: Storage, shape: PathShape, path: String) -> String {
    match storage {
        Storage::Legacy => apply_legacy(r, shape, path),
        Storage::Blob => apply_blob(r, shape, path),
    }
}

/// Legacy-server rules, shared with the legacy thumbnail variant.
pub(super) fn apply_legacy(r: &ResourcePathResolver, shape: PathShape, path: String) -> String {
    let cfg = &r.config;
    match shape {
        PathShape::Absolute(HostKind::AssetHost) => {
            rebase_onto(&path, &r.base, |p| {
                p.replace(ORG_CONTENT_MARKER, &cfg.org_content_path)
            })
            .unwrap_or(path)
        }
        PathShape::Absolute(_) | PathShape::LegacyRewritten => path,
        PathShape::Assets => format!("{}/{}", r.base_url, path),
        PathShape::RootRelative => format!("{}{}{}", r.base_url, cfg.blob_path, path),
        PathShape::LegacyMarker => path.replace(ORG_CONTENT_MARKER, &cfg.org_content_path),
        // Port markers are rewritten before dispatch; the remaining shapes
        // only exist under blob storage.
        PathShape::LegacyPort | PathShape::OrgScoped | PathShape::WwwHost | PathShape::Bare => {
            format!("{}{}{}", r.base_url, cfg.blob_path_alt, path)
        }
    }
}

fn apply_blob(r: &ResourcePathResolver, shape: PathShape, path: String) -> String {
    let cfg = &r.config;
    match shape {
        PathShape::OrgScoped => {
            format!(
                "{}/{}{}",
                r.content_base,
                cfg.org_code,
                after_last(&path, &cfg.org_code)
            )
        }
        PathShape::Absolute(HostKind::Cdn) => path,
        PathShape::Absolute(_) => {
            let moved = replace_host(&path, &r.cdn_host);
            let tail = after_authority(&moved).unwrap_or_else(|| moved.clone());
            if contains_marker(&tail, &cfg.org_code) {
                format!(
                    "{}/{}{}",
                    r.content_base,
                    cfg.org_code,
                    after_last(&tail, &cfg.org_code)
                )
            } else if has_org_marker(r, &moved) {
                let prefix = if cfg.org_code.is_empty() {
                    r.content_base.clone()
                } else {
                    format!("{}/{}", r.content_base, cfg.org_code)
                };
                format!("{}{}", prefix, after_org_marker(r, &moved))
            } else {
                moved
            }
        }
        PathShape::RootRelative => format!("{}{}", r.content_base, path),
        PathShape::LegacyRewritten | PathShape::LegacyMarker => {
            format!("{}{}", r.content_base, after_org_marker(r, &path))
        }
        PathShape::WwwHost => path.replace("www", "content"),
        PathShape::LegacyPort | PathShape::Assets | PathShape::Bare => {
            format!("{}/{}", r.content_base, path)
        }
    }
}

fn has_org_marker(r: &ResourcePathResolver, path: &str) -> bool {
    path.contains(ORG_CONTENT_MARKER) || contains_marker(path, &r.config.org_content_path)
}

/// Text after the last `org-content`, falling back to the configured legacy
/// org path when only that one is present.
fn after_org_marker<'a>(r: &ResourcePathResolver, path: &'a str) -> &'a str {
    if path.contains(ORG_CONTENT_MARKER) {
        after_last(path, ORG_CONTENT_MARKER)
    } else {
        after_last(path, &r.config.org_content_path)
    }
}
