//! Path normalization and download URL derivation

use std::path::Path;

/// Render a path as a string with `/` separators
pub fn normalize(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Compute the anchor-relative path of a discovered file.
///
/// Precondition: `path` uses `/` separators (see [`normalize`]) and `anchor`
/// is non-empty.
///
/// Postcondition: the result starts with `anchor`. When `anchor` occurs in
/// `path`, the result is `anchor` followed by everything after the first
/// occurrence. A second occurrence is kept verbatim in the tail. Otherwise
/// the whole path is prefixed with `anchor`.
pub fn relative_path(path: &str, anchor: &str) -> String {
    match path.find(anchor) {
        Some(index) => format!("{}{}", anchor, &path[index + anchor.len()..]),
        None => format!("{}{}", anchor, path),
    }
}

/// Build the raw download URL for a relative path
pub fn source_url(repo_url: &str, branch: &str, relative_path: &str) -> String {
    format!("{}/raw/{}/{}", repo_url, branch, relative_path)
}
