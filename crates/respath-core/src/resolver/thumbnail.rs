//! Thumbnail rules.
//!
//! Thumbnail paths arrive with `../` traversal and JSON quoting more often
//! than asset paths, so they are sanitised before classification.

use super::full::apply_legacy;
use super::{HostKind, PathShape, Resolution, ResourcePathResolver, Storage, Variant};
use crate::url_model::{
    after_first, join_under, normalize_separators, sanitize_resource_string, LEGACY_PORT_MARKER,
    ORG_CONTENT_MARKER,
};

pub(super) fn resolve(r: &ResourcePathResolver, raw: &str) -> Resolution {
    let path = sanitize_resource_string(raw);
    let storage = r.storage();
    let shape = r.classify_for(&path, storage, Variant::Thumbnail);

    let url = match (storage, shape) {
        (Storage::Legacy, PathShape::Absolute(_)) => path,
        (Storage::Legacy, _) => apply_legacy(r, shape, path),
        (Storage::Blob, _) => apply_blob(r, shape, &path),
    };

    let url = normalize_separators(&url);
    Resolution::new(raw, url, Variant::Thumbnail, shape, shape)
}

fn apply_blob(r: &ResourcePathResolver, shape: PathShape, path: &str) -> String {
    let cfg = &r.config;
    let secured = secure_form(path);
    match shape {
        // Plain-http URL on the legacy base: kept, but upgraded and encoded.
        PathShape::Absolute(HostKind::Legacy) if !path.contains("https://") => secured,
        PathShape::Absolute(_) => path.to_string(),
        PathShape::LegacyRewritten => secured,
        PathShape::LegacyPort => secured.replace(LEGACY_PORT_MARKER, &cfg.blob_path),
        PathShape::LegacyMarker => secured.replace(ORG_CONTENT_MARKER, &cfg.org_content_path),
        PathShape::OrgScoped => {
            let org_base = format!("{}/{}", r.content_base, cfg.org_code);
            join_under(&org_base, after_first(&secured, &cfg.org_code))
        }
        PathShape::Assets | PathShape::RootRelative | PathShape::WwwHost | PathShape::Bare => {
            join_under(&r.content_base, &secured)
        }
    }
}

/// Upgrades `http:` and percent-encodes spaces.
fn secure_form(path: &str) -> String {
    path.replace("http:", "https:").replace(' ', "%20")
}
