//! Joining paths.
//!
//! [`combine`] follows the shell's rules: an absolute right-hand side wins
//! outright, except on drive-letter platforms where a separator-rooted
//! suffix like `\temp` stays on the left-hand side's drive.

use crate::path::normalize::normalize;
use crate::path::prefix::{is_absolute, is_drive};
use crate::policy::PathPolicy;

/// Joins `b` onto `a`.
///
/// - Either side empty: the other side is returned.
/// - `b` absolute: `b` is returned, unless the drive-preserving rule below
///   applies.
/// - On drive-letter platforms, when `a` starts with a drive and `b` starts
///   with a separator, the result is `a`'s drive followed by `b`'s content.
///   A real UNC path in `b` is still returned as-is, and a `b` made only of
///   separators yields a single separator.
/// - Otherwise `a` (without trailing separators), one separator, then `b`.
///
/// # Examples
///
/// ```
/// use shellpath::path::combine;
/// use shellpath::PathPolicy;
///
/// let windows = PathPolicy::WINDOWS;
/// assert_eq!(combine(&windows, r"C:\foo\bar", r"\baz"), r"C:\baz");
/// assert_eq!(combine(&windows, r"C:\foo", "bar"), r"C:\foo\bar");
/// assert_eq!(combine(&windows, r"C:\foo", r"D:\bar"), r"D:\bar");
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(combine(&posix, "/home/me/", "src"), "/home/me/src");
/// assert_eq!(combine(&posix, "/home/me", "/etc"), "/etc");
/// assert_eq!(combine(&posix, "/home/me", ""), "/home/me");
/// ```
#[must_use]
pub fn combine(policy: &PathPolicy, a: &str, b: &str) -> String {
    if b.is_empty() {
        return a.to_string();
    }
    if a.is_empty() {
        return b.to_string();
    }

    if policy.supports_drive_letters() && b.starts_with(policy.separators()) {
        if let Some(joined) = join_on_drive(policy, a, b) {
            return joined;
        }
    }

    join(policy, a, b)
}

/// [`combine`] followed by [`normalize`].
///
/// # Examples
///
/// ```
/// use shellpath::path::combine_normalized;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(combine_normalized(&posix, "/srv/app", "../logs/./today"), "/srv/logs/today");
/// ```
#[must_use]
pub fn combine_normalized(policy: &PathPolicy, a: &str, b: &str) -> String {
    normalize(policy, &combine(policy, a, b))
}

/// The drive `a` starts with, including its separator if it has one.
fn leading_drive<'a>(policy: &PathPolicy, a: &'a str) -> Option<&'a str> {
    match policy.find_separator(a, 0) {
        Some(i) if i > 1 && is_drive(&a[..=i]) => Some(&a[..=i]),
        None if is_drive(a) => Some(a),
        _ => None,
    }
}

fn join_on_drive(policy: &PathPolicy, a: &str, b: &str) -> Option<String> {
    let drive = leading_drive(policy, a)?;

    let Some(start) = b.find(|c| !policy.is_separator(c)) else {
        return Some(policy.separator().to_string());
    };

    // `\\server\share` is rooted on its own; `\\name` is only a fragment.
    if start >= 2 && policy.supports_unc() && policy.find_separator(b, start).is_some() {
        return None;
    }

    log::debug!("keeping drive {drive} of {a} for rooted suffix {b}");
    let rest = &b[start..];
    let mut out = String::with_capacity(drive.len() + rest.len() + 1);
    out.push_str(drive);
    if !drive.ends_with(|c| policy.is_separator(c)) {
        out.push(policy.separator());
    }
    out.push_str(rest);
    Some(out)
}

fn join(policy: &PathPolicy, a: &str, b: &str) -> String {
    if is_absolute(policy, b) {
        return b.to_string();
    }

    let head = policy.trim_end_separators(a);
    if head.is_empty() {
        // `a` is nothing but separators; keep them as the root.
        return format!("{a}{b}");
    }
    format!("{head}{}{b}", policy.separator())
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: PathPolicy = PathPolicy::WINDOWS;
    const P: PathPolicy = PathPolicy::POSIX;

    #[test]
    fn test_combine_empty_operands() {
        assert_eq!(combine(&P, "/a", ""), "/a");
        assert_eq!(combine(&P, "", "b"), "b");
        assert_eq!(combine(&W, "", ""), "");
    }

    #[test]
    fn test_combine_relative_suffix() {
        assert_eq!(combine(&P, "a", "b"), "a/b");
        assert_eq!(combine(&P, "a//", "b/c"), "a/b/c");
        assert_eq!(combine(&P, "/", "b"), "/b");
        assert_eq!(combine(&P, "env:", "x"), "env:/x");
        assert_eq!(combine(&W, "a/", "b"), "a\\b");
        assert_eq!(combine(&W, "C:\\", "b"), "C:\\b");
        assert_eq!(combine(&W, "C:", "b"), "C:\\b");
    }

    #[test]
    fn test_combine_absolute_suffix_wins() {
        assert_eq!(combine(&P, "/a/b", "/c"), "/c");
        assert_eq!(combine(&P, "/a/b", "env:/x"), "env:/x");
        assert_eq!(combine(&W, "C:\\a", "D:\\b"), "D:\\b");
        assert_eq!(combine(&W, "foo\\bar", "\\baz"), "\\baz");
        assert_eq!(combine(&W, "\\\\srv\\share\\x", "\\baz"), "\\baz");
    }

    #[test]
    fn test_combine_keeps_drive() {
        assert_eq!(combine(&W, "C:\\foo\\bar", "\\baz"), "C:\\baz");
        assert_eq!(combine(&W, "C:/foo", "/baz/qux"), "C:/baz/qux");
        assert_eq!(combine(&W, "C:", "\\baz"), "C:\\baz");
        assert_eq!(combine(&W, "Env:\\Path", "/\\HOME"), "Env:\\HOME");
    }

    #[test]
    fn test_combine_unc_suffix() {
        assert_eq!(
            combine(&W, "C:\\foo", "\\\\server\\share"),
            "\\\\server\\share"
        );
        assert_eq!(combine(&W, "C:\\foo", "\\\\bar"), "C:\\bar");
        assert_eq!(combine(&W, "C:\\foo", "\\\\\\bar"), "C:\\bar");
    }

    #[test]
    fn test_combine_separator_only_suffix() {
        assert_eq!(combine(&W, "C:\\foo", "\\"), "\\");
        assert_eq!(combine(&W, "C:\\foo", "/\\/"), "\\");
    }

    #[test]
    fn test_combine_posix_has_no_drive_rule() {
        assert_eq!(combine(&P, "C:/foo", "/baz"), "/baz");
    }

    #[test]
    fn test_combine_normalized() {
        assert_eq!(combine_normalized(&P, "/a/b", "../c"), "/a/c");
        assert_eq!(combine_normalized(&W, "C:\\a\\b", "\\x\\.\\y"), "C:\\x\\y");
        assert_eq!(combine_normalized(&P, "a", ".."), ".");
    }
}
