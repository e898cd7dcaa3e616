//! Path utilities for snapshot file names.

/// Sanitize a repository name for use as a single path component
///
/// Replaces path traversal sequences and characters that are invalid in file
/// names on common platforms, so a snapshot always lands inside its directory.
///
/// # Examples
///
/// ```ignore
/// // This is an internal utility function
/// assert_eq!(sanitize_path_component("Hello-World"), "Hello-World");
/// assert_eq!(sanitize_path_component("../outside"), "___outside");
/// ```
#[must_use]
pub fn sanitize_path_component(s: &str) -> String {
    // ".." first, so names such as "repo.rs" keep their single dots
    let s = s.replace("..", "__");
    s.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_")
}
