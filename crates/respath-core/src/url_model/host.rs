//! Host-level URL rewriting.

use url::{Position, Url};

/// Host of `raw` when it parses as an absolute URL with a host.
pub fn host_of(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    parsed.host_str().map(str::to_string)
}

/// True if `raw` parses as an absolute URL whose scheme starts with `https`.
pub fn has_https_scheme(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| u.scheme().starts_with("https"))
        .unwrap_or(false)
}

/// Swaps the host of `raw` for `new_host`, keeping scheme, port, path and query.
///
/// Returns `raw` unchanged when it is not an absolute URL with a host.
pub fn replace_host(raw: &str, new_host: &str) -> String {
    let mut parsed = match Url::parse(raw) {
        Ok(u) if u.host_str().is_some() => u,
        _ => return raw.to_string(),
    };
    match parsed.set_host(Some(new_host)) {
        Ok(()) => parsed.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Path, query and fragment of `raw`, i.e. everything after host and port.
///
/// Returns `None` when `raw` is not an absolute URL.
pub fn after_authority(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    Some(parsed[Position::BeforePath..].to_string())
}

/// Moves `raw` onto the scheme and host of `base`, rewriting its path with
/// `rewrite_path`. The port of `raw` is kept.
///
/// Returns `None` when either side cannot be rebased (unparseable URL,
/// incompatible scheme, or a base without host).
pub fn rebase_onto<F>(raw: &str, base: &Url, rewrite_path: F) -> Option<String>
where
    F: FnOnce(&str) -> String,
{
    let mut parsed = Url::parse(raw).ok()?;
    parsed.set_scheme(base.scheme()).ok()?;
    parsed.set_host(base.host_str()).ok()?;
    let new_path = rewrite_path(parsed.path());
    parsed.set_path(&new_path);
    Some(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_extraction() {
        assert_eq!(
            host_of("https://lxp.example.com:10000/a.png").as_deref(),
            Some("lxp.example.com")
        );
        assert_eq!(host_of("org-content/a.png"), None);
        assert_eq!(host_of("/a.png"), None);
    }

    #[test]
    fn https_detection() {
        assert!(has_https_scheme("https://example.com/a.png"));
        assert!(!has_https_scheme("http://example.com/a.png"));
        assert!(!has_https_scheme("example.com/a.png"));
    }

    #[test]
    fn host_replacement_keeps_path_and_query() {
        assert_eq!(
            replace_host("https://old.example.com/x/y.png?v=2", "new.example.com"),
            "https://new.example.com/x/y.png?v=2"
        );
    }

    #[test]
    fn authority_stripped() {
        assert_eq!(
            after_authority("https://acme.example.com:8443/a/b.png?v=1").as_deref(),
            Some("/a/b.png?v=1")
        );
        assert_eq!(after_authority("a/b.png"), None);
    }

    #[test]
    fn host_replacement_leaves_relative_input() {
        assert_eq!(replace_host("x/y.png", "new.example.com"), "x/y.png");
    }

    #[test]
    fn rebase_swaps_scheme_and_host() {
        let base = Url::parse("http://lxp.example.com").unwrap();
        let out = rebase_onto(
            "https://assets.example.com/org-content/a.png",
            &base,
            |p| p.replace("org-content", "lxp-o"),
        );
        assert_eq!(out.as_deref(), Some("http://lxp.example.com/lxp-o/a.png"));
    }

    #[test]
    fn rebase_keeps_port() {
        let base = Url::parse("https://lxp.example.com").unwrap();
        let out = rebase_onto("https://assets.example.com:8443/a.png", &base, str::to_string);
        assert_eq!(out.as_deref(), Some("https://lxp.example.com:8443/a.png"));
    }

    #[test]
    fn rebase_rejects_garbage() {
        let base = Url::parse("https://lxp.example.com").unwrap();
        assert_eq!(rebase_onto("not a url", &base, str::to_string), None);
    }
}
