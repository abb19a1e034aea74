//! Navigation highlighting.

const INDEX_PAGE: &str = "index.html";

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Whether a nav link points at the page currently shown.
///
/// Only the last path segment is compared; an empty current segment
/// (a directory URL) matches `index.html`.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    let current = last_segment(current_path);
    let link = last_segment(href);
    link == current || (current.is_empty() && link == INDEX_PAGE)
}
