//! Substring splicing and joining helpers.

/// Substring test that never matches an empty needle.
///
/// Config fragments such as the org code may be unset; an empty marker must
/// not make every path look like it carries one.
pub fn contains_marker(haystack: &str, marker: &str) -> bool {
    !marker.is_empty() && haystack.contains(marker)
}

/// Text after the last occurrence of `marker`, or all of `raw` if absent.
pub fn after_last<'a>(raw: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return raw;
    }
    raw.rsplit_once(marker).map(|(_, tail)| tail).unwrap_or(raw)
}

/// Text after the first occurrence of `marker`, or all of `raw` if absent.
pub fn after_first<'a>(raw: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return raw;
    }
    raw.split_once(marker).map(|(_, tail)| tail).unwrap_or(raw)
}

/// Joins `path` under `base` with exactly the one `/` that `path` may lack.
pub fn join_under(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// `raw` without trailing `/` characters.
pub fn trim_trailing_slash(raw: &str) -> &str {
    raw.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_marker_never_matches() {
        assert!(!contains_marker("anything", ""));
        assert!(contains_marker("a/ORG1/b", "ORG1"));
    }

    #[test]
    fn splice_points() {
        assert_eq!(after_last("x/ORG1/a/ORG1/b.png", "ORG1"), "/b.png");
        assert_eq!(after_first("x/ORG1/a/ORG1/b.png", "ORG1"), "/a/ORG1/b.png");
        assert_eq!(after_last("no-marker.png", "ORG1"), "no-marker.png");
        assert_eq!(after_first("no-marker.png", ""), "no-marker.png");
    }

    #[test]
    fn join_inserts_single_separator() {
        assert_eq!(join_under("https://cdn", "/a.png"), "https://cdn/a.png");
        assert_eq!(join_under("https://cdn", "a.png"), "https://cdn/a.png");
    }

    #[test]
    fn trailing_slashes() {
        assert_eq!(trim_trailing_slash("https://cdn.example.com//"), "https://cdn.example.com");
        assert_eq!(trim_trailing_slash("https://cdn.example.com"), "https://cdn.example.com");
    }
}
