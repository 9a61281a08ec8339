//! Path normalization.
//!
//! Normalization is purely lexical: the prefix is kept (with its separators
//! rewritten to the canonical one), empty and `.` components are dropped,
//! and each `..` cancels the component before it when there is one to
//! cancel. A leading `..` survives because nothing is known about what lies
//! above a relative path.

use crate::path::prefix::{needs_separator, resolve_prefix};
use crate::policy::PathPolicy;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Normalizes `path` without touching the filesystem.
///
/// Relative paths that collapse to nothing become `.`; absolute ones become
/// their prefix alone. The result is stable: normalizing it again returns
/// it unchanged.
///
/// # Examples
///
/// ```
/// use shellpath::path::normalize;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(normalize(&posix, "a/./b/../c"), "a/c");
/// assert_eq!(normalize(&posix, "../../a"), "../../a");
/// assert_eq!(normalize(&posix, "a/.."), ".");
/// assert_eq!(normalize(&posix, "/a/.."), "/");
///
/// let windows = PathPolicy::WINDOWS;
/// assert_eq!(normalize(&windows, "c:/Users//me/./docs/.."), r"c:\Users\me");
/// ```
#[must_use]
pub fn normalize(policy: &PathPolicy, path: &str) -> String {
    let (prefix, rest) = resolve_prefix(policy, path);
    let components = resolve_components(policy.split(rest));
    render(
        policy,
        &policy.canonicalize_separators(prefix.as_str()),
        &components,
    )
}

/// Folds raw components, dropping `.` and empty pieces and letting `..`
/// cancel the previous component.
///
/// # Examples
///
/// ```
/// use shellpath::path::normalize::resolve_components;
///
/// let parts = resolve_components(["a", "", ".", "b", "..", "c"]);
/// assert_eq!(parts, vec!["a", "c"]);
///
/// let parts = resolve_components(["..", "a", "..", ".."]);
/// assert_eq!(parts, vec!["..", ".."]);
/// ```
pub fn resolve_components<'a, I>(components: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<&'a str> = Vec::new();
    for component in components {
        match component {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match out.last() {
                Some(&last) if last != PARENT_DIR => {
                    out.pop();
                }
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    out
}

/// Renders a prefix and components as a path string.
///
/// `prefix` is written verbatim; a separator is inserted after it unless it
/// already ends in one or is a bare `name:` drive.
pub(crate) fn render<S: AsRef<str>>(policy: &PathPolicy, prefix: &str, components: &[S]) -> String {
    let sep = policy.separator();
    if components.is_empty() {
        return if prefix.is_empty() {
            CURRENT_DIR.to_string()
        } else {
            prefix.to_string()
        };
    }

    let mut out = String::with_capacity(
        prefix.len() + components.iter().map(|c| c.as_ref().len() + 1).sum::<usize>(),
    );
    out.push_str(prefix);
    if needs_separator(policy, prefix) {
        out.push(sep);
    }
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(component.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: PathPolicy = PathPolicy::WINDOWS;
    const P: PathPolicy = PathPolicy::POSIX;

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize(&P, "a/./b/../c"), "a/c");
        assert_eq!(normalize(&P, "/a/b/../../c"), "/c");
        assert_eq!(normalize(&P, "a//b///c/"), "a/b/c");
    }

    #[test]
    fn test_normalize_keeps_leading_parent() {
        assert_eq!(normalize(&P, "../../a"), "../../a");
        assert_eq!(normalize(&P, "a/../../b"), "../b");
        assert_eq!(normalize(&W, "..\\x\\..\\.."), "..\\..");
    }

    #[test]
    fn test_normalize_empty_results() {
        assert_eq!(normalize(&P, ""), ".");
        assert_eq!(normalize(&P, "."), ".");
        assert_eq!(normalize(&P, "./."), ".");
        assert_eq!(normalize(&P, "a/.."), ".");
        assert_eq!(normalize(&P, "/"), "/");
        assert_eq!(normalize(&P, "///"), "/");
        assert_eq!(normalize(&W, "C:"), "C:");
        assert_eq!(normalize(&W, "C:/"), "C:\\");
    }

    #[test]
    fn test_normalize_parent_at_root_is_kept() {
        // The rest is folded independently of the prefix.
        assert_eq!(normalize(&P, "/.."), "/..");
        assert_eq!(normalize(&P, "/a/../.."), "/..");
        assert_eq!(normalize(&P, "/a/.."), "/");
    }

    #[test]
    fn test_normalize_windows_separators() {
        assert_eq!(normalize(&W, "C:/a/b"), "C:\\a\\b");
        assert_eq!(normalize(&W, "//server/share/x/../y"), "\\\\server\\share\\y");
        assert_eq!(normalize(&W, "a/b\\c"), "a\\b\\c");
    }

    #[test]
    fn test_normalize_posix_keeps_backslashes() {
        assert_eq!(normalize(&P, "a\\b/./c"), "a\\b/c");
    }

    #[test]
    fn test_normalize_virtual_drives() {
        assert_eq!(normalize(&P, "env:/FOO/../BAR"), "env:/BAR");
        assert_eq!(normalize(&P, "env:FOO/BAR"), "env:FOO/BAR");
        assert_eq!(normalize(&P, "env:FOO/../BAR"), "env:BAR");
        assert_eq!(normalize(&P, "ab:\\c"), "ab:\\c");
        assert_eq!(normalize(&W, "HKLM:/Software/./x"), "HKLM:\\Software\\x");
    }

    #[test]
    fn test_normalize_colon_name_surfacing_after_fold() {
        // A fold can leave a `name:` component at the front of a relative
        // path, where the next pass reads it as a drive.
        assert_eq!(normalize(&P, "a/../b:c"), "b:c");
        assert_eq!(normalize(&P, "b:c"), "b:c");
        assert_eq!(normalize(&P, "x/../env:FOO"), "env:FOO");
        assert_eq!(normalize(&P, "env:FOO"), "env:FOO");
        assert_eq!(normalize(&P, "x/../ab:\\c"), "ab:\\c");
        assert_eq!(normalize(&W, "a\\..\\b:c"), "b:c");
    }

    #[test]
    fn test_normalize_idempotent_examples() {
        for (policy, input) in [
            (P, "env:FOO/BAR"),
            (P, "a/../b:c"),
            (P, "x/../env:FOO"),
            (P, "x/../ab:\\c"),
            (P, "a/../b:c:d/.."),
            (W, "a\\..\\env:\\x"),
            (P, "/a/../.."),
            (P, "a/../.."),
            (W, "\\\\server\\share"),
            (W, "\\\\\\x"),
            (W, "//"),
            (W, "C:foo\\..\\.."),
        ] {
            let once = normalize(&policy, input);
            assert_eq!(normalize(&policy, &once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(render::<&str>(&P, "", &[]), ".");
        assert_eq!(render::<&str>(&P, "/", &[]), "/");
        assert_eq!(render(&P, "/", &["a", "b"]), "/a/b");
        assert_eq!(render(&P, "env:", &["a"]), "env:a");
        assert_eq!(render(&P, "env:/", &["a"]), "env:/a");
        assert_eq!(render(&P, "ab:\\", &["c"]), "ab:\\c");
        assert_eq!(render(&W, "C:\\", &["a", "b"]), "C:\\a\\b");
        assert_eq!(render(&W, "", &["..", "a"]), "..\\a");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn component_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(".".to_string()),
                Just("..".to_string()),
                Just(String::new()),
                "[a-zA-Z0-9_-]{1,8}",
                "[a-zA-Z]{1,4}:",
                "[a-zA-Z]{1,4}:[a-zA-Z0-9]{1,4}",
            ]
        }

        fn path_strategy() -> impl Strategy<Value = String> {
            (
                prop_oneof![
                    Just(""),
                    Just("/"),
                    Just("\\"),
                    Just("C:\\"),
                    Just("\\\\srv\\share\\"),
                    Just("env:")
                ],
                prop::collection::vec(component_strategy(), 0..8),
                prop_oneof![Just("/"), Just("\\")],
            )
                .prop_map(|(prefix, parts, sep)| format!("{prefix}{}", parts.join(sep)))
        }

        proptest! {
            /// Normalization is idempotent under both policies
            #[test]
            fn normalize_idempotent(s in path_strategy()) {
                for policy in [P, W] {
                    let once = normalize(&policy, &s);
                    prop_assert_eq!(normalize(&policy, &once), once);
                }
            }

            /// Normalized relative paths never contain "." components
            #[test]
            fn normalize_no_current_dir(s in path_strategy()) {
                for policy in [P, W] {
                    let normalized = normalize(&policy, &s);
                    if normalized != "." {
                        prop_assert!(policy.split(&normalized).all(|c| c != "."));
                    }
                }
            }

            /// ".." only appears as a leading run of the rest
            #[test]
            fn normalize_parent_only_leading(s in path_strategy()) {
                let normalized = normalize(&W, &s);
                let (_, rest) = resolve_prefix(&W, &normalized);
                let parts: Vec<&str> = W.split(rest).filter(|c| !c.is_empty()).collect();
                let leading = parts.iter().take_while(|c| **c == "..").count();
                prop_assert!(parts[leading..].iter().all(|c| *c != ".."));
            }
        }
    }
}
