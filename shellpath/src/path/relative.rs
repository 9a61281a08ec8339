//! Relative path computation.

use std::iter;

use crate::path::components::{common_prefix_len, split_components};
use crate::path::normalize::{normalize, render};
use crate::path::prefix::resolve_prefix;
use crate::policy::PathPolicy;

const PARENT_DIR: &str = "..";

/// Computes the shortest relative path leading from `relative_to` to `path`.
///
/// Both arguments are normalized first and should be absolute. A relative
/// path cannot cross roots: when the prefixes differ (`C:` vs `D:`, or two
/// UNC shares) the normalized `path` is returned unchanged.
///
/// # Examples
///
/// ```
/// use shellpath::path::relative;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(relative(&posix, "/a/b/c", "/a/d"), "../b/c");
/// assert_eq!(relative(&posix, "/a/b", "/a/b"), ".");
///
/// let windows = PathPolicy::WINDOWS;
/// assert_eq!(relative(&windows, r"c:\Users\Me\src", r"C:\users\me"), "src");
/// assert_eq!(relative(&windows, r"D:\x", r"C:\y"), r"D:\x");
/// ```
#[must_use]
pub fn relative(policy: &PathPolicy, path: &str, relative_to: &str) -> String {
    let path = normalize(policy, path);
    let base = normalize(policy, relative_to);

    let (path_prefix, path_rest) = resolve_prefix(policy, &path);
    let (base_prefix, base_rest) = resolve_prefix(policy, &base);

    if !path_prefix.matches(policy, &base_prefix) {
        log::debug!("{path} and {base} have different roots; keeping the absolute path");
        return path;
    }

    let target = split_components(policy, path_rest);
    let from = split_components(policy, base_rest);
    let common = common_prefix_len(policy, &target, &from);

    let steps: Vec<&str> = iter::repeat(PARENT_DIR)
        .take(from.len() - common)
        .chain(target[common..].iter().copied())
        .collect();

    render(policy, "", &steps)
}
