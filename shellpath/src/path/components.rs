//! Component-wise matching.
//!
//! These helpers answer "is this path under that one?" by comparing
//! component sequences element by element, using the policy's case rule.
//! They never resolve `.` or `..` on their own; [`starts_with`] normalizes
//! first, the `_verbatim` and slice variants do not.

use crate::path::normalize::normalize;
use crate::path::prefix::{resolve_prefix, Prefix};
use crate::policy::PathPolicy;

/// Splits `path` into its prefix and its non-empty components.
///
/// # Examples
///
/// ```
/// use shellpath::path::components;
/// use shellpath::PathPolicy;
///
/// let (prefix, parts) = components(&PathPolicy::WINDOWS, r"C:\a\\.\b");
/// assert_eq!(prefix.as_str(), r"C:\");
/// assert_eq!(parts, vec!["a", ".", "b"]);
/// ```
#[must_use]
pub fn components<'a>(policy: &PathPolicy, path: &'a str) -> (Prefix<'a>, Vec<&'a str>) {
    let (prefix, rest) = resolve_prefix(policy, path);
    (prefix, split_components(policy, rest))
}

/// Tests whether `path` lies at or below `with`, after normalizing both.
///
/// # Examples
///
/// ```
/// use shellpath::path::starts_with;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert!(starts_with(&posix, "/home/me/src", "/home/me"));
/// assert!(starts_with(&posix, "/home/me/../you", "/home"));
/// assert!(!starts_with(&posix, "/home/meow", "/home/me"));
/// ```
#[must_use]
pub fn starts_with(policy: &PathPolicy, path: &str, with: &str) -> bool {
    starts_with_verbatim(policy, &normalize(policy, path), &normalize(policy, with))
}

/// Like [`starts_with`] but compares the inputs as written.
#[must_use]
pub fn starts_with_verbatim(policy: &PathPolicy, path: &str, with: &str) -> bool {
    let (path_prefix, path_parts) = components(policy, path);
    let (with_prefix, with_parts) = components(policy, with);

    with_prefix.matches(policy, &path_prefix)
        && components_start_with(policy, &path_parts, &with_parts)
}

/// Tests whether `prefix` is a leading run of `path`, element by element.
///
/// # Examples
///
/// ```
/// use shellpath::path::components_start_with;
/// use shellpath::PathPolicy;
///
/// let windows = PathPolicy::WINDOWS;
/// assert!(components_start_with(&windows, &["Users", "me", "src"], &["users", "ME"]));
/// assert!(!components_start_with(&windows, &["Users"], &["Users", "me"]));
/// ```
#[must_use]
pub fn components_start_with<S, T>(policy: &PathPolicy, path: &[S], prefix: &[T]) -> bool
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    path.len() >= prefix.len() && common_prefix_len(policy, path, prefix) == prefix.len()
}

/// Returns the part of `path` after `prefix`, or all of `path` when
/// `prefix` does not match.
///
/// A non-match is not an error; compare lengths to tell the cases apart.
///
/// # Examples
///
/// ```
/// use shellpath::path::strip_prefix;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// let path = ["home", "me", "src"];
/// assert_eq!(strip_prefix(&posix, &path, &["home", "me"]), &["src"]);
/// assert_eq!(strip_prefix(&posix, &path, &["srv"]), &path);
/// ```
#[must_use]
pub fn strip_prefix<'s, S, T>(policy: &PathPolicy, path: &'s [S], prefix: &[T]) -> &'s [S]
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if components_start_with(policy, path, prefix) {
        &path[prefix.len()..]
    } else {
        path
    }
}

/// Non-empty pieces of `rest`.
pub(crate) fn split_components<'a>(policy: &PathPolicy, rest: &'a str) -> Vec<&'a str> {
    policy.split(rest).filter(|c| !c.is_empty()).collect()
}

/// Length of the longest run of equal leading elements.
pub(crate) fn common_prefix_len<S, T>(policy: &PathPolicy, a: &[S], b: &[T]) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    a.iter()
        .zip(b)
        .take_while(|(x, y)| policy.names_eq(x.as_ref(), y.as_ref()))
        .count()
}
