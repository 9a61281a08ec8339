//! String-level parent lookup and separator trimming.

use crate::path::prefix::{needs_separator, resolve_prefix};
use crate::policy::PathPolicy;

/// Returns the parent of `path` without normalizing it.
///
/// Trailing separators are ignored. A path with nothing after its prefix
/// has no parent and yields `""`; a path with a single component yields its
/// prefix (which is `""` for a relative path).
///
/// # Examples
///
/// ```
/// use shellpath::path::parent;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(parent(&posix, "/usr/lib/"), "/usr");
/// assert_eq!(parent(&posix, "/usr"), "/");
/// assert_eq!(parent(&posix, "/"), "");
///
/// let windows = PathPolicy::WINDOWS;
/// assert_eq!(parent(&windows, r"C:\Users"), r"C:\");
/// assert_eq!(parent(&windows, r"\\srv\share\dir"), r"\\srv\share\");
/// ```
#[must_use]
pub fn parent(policy: &PathPolicy, path: &str) -> String {
    let (prefix, rest) = resolve_prefix(policy, path);

    let trimmed = policy.trim_end_separators(rest);
    if trimmed.is_empty() {
        return String::new();
    }

    let Some(last_sep) = trimmed.rfind(policy.separators()) else {
        return prefix.as_str().to_string();
    };

    let head = policy.trim_end_separators(&trimmed[..last_sep]);
    if head.is_empty() {
        return prefix.as_str().to_string();
    }

    let prefix = prefix.as_str();
    let mut out = String::with_capacity(prefix.len() + head.len() + 1);
    out.push_str(prefix);
    if needs_separator(policy, prefix) {
        out.push(policy.separator());
    }
    out.push_str(head);
    out
}

/// Strips trailing separators, leaving a path that is exactly one
/// separator alone.
///
/// # Examples
///
/// ```
/// use shellpath::path::trim_trailing_separators;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(trim_trailing_separators(&posix, "/srv/"), "/srv");
/// assert_eq!(trim_trailing_separators(&posix, "/"), "/");
/// ```
#[must_use]
pub fn trim_trailing_separators<'a>(policy: &PathPolicy, path: &'a str) -> &'a str {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if policy.is_separator(c) => path,
        _ => policy.trim_end_separators(path),
    }
}
