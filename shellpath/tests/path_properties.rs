//! Integration tests for the path algebra under both built-in policies.
//!
//! Everything runs from a single binary: the policy is a value, so Windows
//! and POSIX rules are checked side by side regardless of the host.

use shellpath::path::{
    combine, components, is_absolute, normalize, parent, relative, resolve_prefix, starts_with,
    PrefixKind,
};
use shellpath::PathPolicy;

const WINDOWS: PathPolicy = PathPolicy::WINDOWS;
const POSIX: PathPolicy = PathPolicy::POSIX;

const SAMPLES: &[&str] = &[
    "",
    ".",
    "..",
    "a/./b/../c",
    "../../a",
    "/",
    "//",
    "///usr//lib/",
    "C:",
    "C:\\",
    "C:/Windows/../Users",
    "\\\\server\\share",
    "\\\\server\\share\\dir\\..",
    "\\\\server",
    "\\\\\\x",
    "env:",
    "env:FOO/BAR",
    "variable:/x/./y",
    "HKLM:\\Software\\..\\System",
    "a.b:/c",
    "a/../b:c",
    "x/../env:FOO",
    "x/../ab:\\c",
    "ab:\\c",
];

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_normalize_is_idempotent() {
    for policy in [WINDOWS, POSIX] {
        for sample in SAMPLES {
            let once = normalize(&policy, sample);
            assert_eq!(
                normalize(&policy, &once),
                once,
                "normalizing {sample:?} twice under {policy:?}"
            );
        }
    }
}

#[test]
fn test_normalize_collapses_dots() {
    for policy in [WINDOWS, POSIX] {
        assert_eq!(
            normalize(&policy, "a/./b/../c"),
            format!("a{}c", policy.separator())
        );
        assert_eq!(
            normalize(&policy, "../../a"),
            format!("..{0}..{0}a", policy.separator())
        );
    }
}

#[test]
fn test_prefix_round_trip() {
    for policy in [WINDOWS, POSIX] {
        for sample in SAMPLES {
            let (prefix, rest) = components(&policy, sample);
            let sep = policy.separator().to_string();
            let mut rebuilt = prefix.as_str().to_string();
            if !rebuilt.is_empty()
                && !rest.is_empty()
                && !rebuilt.ends_with(|c| c == ':' || c == '\\' || policy.is_separator(c))
            {
                rebuilt.push(policy.separator());
            }
            rebuilt.push_str(&rest.join(&sep));

            assert_eq!(
                normalize(&policy, &rebuilt),
                normalize(&policy, sample),
                "rebuilding {sample:?} under {policy:?}"
            );
        }
    }
}

// =============================================================================
// Prefix detection
// =============================================================================

#[test]
fn test_unc_detection() {
    let (prefix, rest) = resolve_prefix(&WINDOWS, "\\\\server\\share\\dir");
    assert_eq!(prefix.as_str(), "\\\\server\\share\\");
    assert_eq!(prefix.kind(), PrefixKind::Unc);
    assert_eq!(rest, "dir");
}

#[test]
fn test_virtual_drive_detection() {
    let (prefix, rest) = resolve_prefix(&POSIX, "env:FOO/BAR");
    assert_eq!(prefix.as_str(), "env:");
    assert_eq!(prefix.kind(), PrefixKind::Drive);
    assert_eq!(rest, "FOO/BAR");
}

#[test]
fn test_absolute_depends_on_policy() {
    assert!(is_absolute(&WINDOWS, "\\temp"));
    assert!(!is_absolute(&POSIX, "\\temp"));
    assert!(is_absolute(&WINDOWS, "D:"));
    assert!(is_absolute(&POSIX, "D:"));
}

// =============================================================================
// Combine and relative
// =============================================================================

#[test]
fn test_combine_with_empty_operand() {
    for policy in [WINDOWS, POSIX] {
        for sample in SAMPLES {
            assert_eq!(combine(&policy, sample, ""), *sample);
            assert_eq!(combine(&policy, "", sample), *sample);
        }
    }
}

#[test]
fn test_drive_preserving_combine() {
    assert_eq!(combine(&WINDOWS, "C:\\foo\\bar", "\\baz"), "C:\\baz");
    assert_eq!(combine(&POSIX, "/foo/bar", "/baz"), "/baz");
}

#[test]
fn test_relative_inverts_combine() {
    let cases = [
        (WINDOWS, "C:\\work", "src\\lib"),
        (WINDOWS, "\\\\srv\\share\\team", "notes"),
        (WINDOWS, "HKLM:\\Software", "Vendor\\App"),
        (POSIX, "/home/me", "src/./lib"),
        (POSIX, "env:/", "PATH"),
        (POSIX, "/", "etc"),
    ];
    for (policy, base, extra) in cases {
        let joined = combine(&policy, base, extra);
        assert_eq!(
            relative(&policy, &joined, base),
            normalize(&policy, extra),
            "{base:?} + {extra:?}"
        );
    }
}

#[test]
fn test_relative_cross_root() {
    assert_eq!(relative(&WINDOWS, "D:\\x", "C:\\y"), "D:\\x");
    assert_eq!(relative(&POSIX, "env:/x", "/x"), "env:/x");
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_starts_with_is_reflexive() {
    for policy in [WINDOWS, POSIX] {
        for sample in SAMPLES {
            let normalized = normalize(&policy, sample);
            assert!(
                starts_with(&policy, &normalized, &normalized),
                "{normalized:?} under {policy:?}"
            );
        }
    }
}

#[test]
fn test_case_policy_in_matching() {
    assert!(starts_with(&WINDOWS, "C:\\Users\\Me\\Docs", "c:\\users\\me"));
    assert!(!starts_with(&POSIX, "/Users/Me/Docs", "/users/me"));
}

#[test]
fn test_parent_walks_up_to_prefix() {
    let mut path = "C:\\a\\b\\c".to_string();
    let mut seen = Vec::new();
    while !path.is_empty() {
        seen.push(path.clone());
        path = parent(&WINDOWS, &path);
    }
    assert_eq!(seen, ["C:\\a\\b\\c", "C:\\a\\b", "C:\\a", "C:\\"]);
}
