//! URL and path-string primitives used by the resolution rules.
//!
//! Everything here operates on plain strings: the inputs come from a content
//! metadata service and are frequently not valid URLs, so parsing with the
//! `url` crate is only attempted where a rule needs the host or scheme.

mod host;
mod path;
mod sanitize;

pub use host::{after_authority, has_https_scheme, host_of, rebase_onto, replace_host};
pub use path::{after_first, after_last, contains_marker, join_under, trim_trailing_slash};
pub use sanitize::{normalize_separators, sanitize_resource_string, strip_parent_segments};

/// Literal marker the content service embeds for organization content.
pub const ORG_CONTENT_MARKER: &str = "org-content";

/// Port marker left in paths produced by the legacy asset server.
pub const LEGACY_PORT_MARKER: &str = ":10000";

/// Host prefix of the legacy asset servers.
pub const ASSET_HOST_PREFIX: &str = "https://assets";

/// Substring that identifies bundled asset paths.
pub const ASSETS_MARKER: &str = "assets";
