//! Clean-up of raw path strings before any rule is applied.

/// Converts every `\` to `/`.
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Removes every `../` sequence. Content paths are never resolved against a
/// parent directory, so the traversal is simply dropped.
pub fn strip_parent_segments(raw: &str) -> String {
    raw.replace("../", "")
}

/// Full sanitisation applied to paths as they arrive from the content service:
///
/// - drops `../` sequences
/// - converts `\` to `/`
/// - trims `"` from both ends (JSON-quoted values are common)
pub fn sanitize_resource_string(raw: &str) -> String {
    let stripped = strip_parent_segments(raw);
    normalize_separators(&stripped)
        .trim_matches('"')
        .to_string()
}
