//! Property-based tests across the path operations.
//!
//! Note: normalize and relationship already carry their own property tests.
//! This module checks how the operations fit together.

use super::combine::combine;
use super::components::starts_with;
use super::normalize::normalize;
use super::prefix::resolve_prefix;
use super::relative::relative;
use super::PathBuffer;
use crate::policy::PathPolicy;
use proptest::prelude::*;

const W: PathPolicy = PathPolicy::WINDOWS;
const P: PathPolicy = PathPolicy::POSIX;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(name_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn posix_root_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(name_strategy(), 0..6).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_root_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("C:\\"), Just("d:/"), Just("\\\\srv\\share\\"), Just("\\")],
        prop::collection::vec(name_strategy(), 0..6),
    )
        .prop_map(|(prefix, parts)| format!("{prefix}{}", parts.join("\\")))
}

fn messy_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            Just("C:".to_string()),
            Just("env:".to_string()),
            name_strategy(),
            "[a-z]{1,4}:",
            "[a-z]{1,4}:[a-z0-9]{1,4}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The prefix is a head of the input and the rest is what follows it,
    // modulo separators swallowed between the two
    #[test]
    fn prefix_round_trip(path in messy_strategy()) {
        for policy in [P, W] {
            let (prefix, rest) = resolve_prefix(&policy, &path);
            prop_assert!(path.starts_with(prefix.as_str()));
            prop_assert!(path.ends_with(rest));
            prop_assert_eq!(
                policy.trim_start_separators(&path[prefix.as_str().len()..]),
                policy.trim_start_separators(rest)
            );
        }
    }

    // Idempotence holds even when a fold leaves a drive-like name in front
    #[test]
    fn normalize_idempotent_with_colon_names(path in messy_strategy()) {
        for policy in [P, W] {
            let once = normalize(&policy, &path);
            prop_assert_eq!(normalize(&policy, &once), once);
        }
    }

    // combine(a, "") == a and combine("", b) == b
    #[test]
    fn combine_empty_operands(path in messy_strategy()) {
        for policy in [P, W] {
            prop_assert_eq!(combine(&policy, &path, ""), path.clone());
            prop_assert_eq!(combine(&policy, "", &path), path.clone());
        }
    }

    // An absolute right-hand side replaces the base
    #[test]
    fn combine_absolute_wins(base in posix_root_strategy(), other in posix_root_strategy()) {
        prop_assert_eq!(combine(&P, &base, &other), other);
    }

    // starts_with is reflexive
    #[test]
    fn starts_with_reflexive(path in messy_strategy()) {
        for policy in [P, W] {
            prop_assert!(starts_with(&policy, &path, &path));
        }
    }

    // A joined path starts with its base
    #[test]
    fn combined_starts_with_base(base in windows_root_strategy(), extra in relative_path_strategy()) {
        let joined = combine(&W, &base, &extra);
        prop_assert!(starts_with(&W, &joined, &base));
    }

    // relative(combine(base, extra), base) == normalize(extra)
    #[test]
    fn relative_inverts_combine_posix(base in posix_root_strategy(), extra in relative_path_strategy()) {
        let joined = combine(&P, &base, &extra);
        prop_assert_eq!(relative(&P, &joined, &base), normalize(&P, &extra));
    }

    #[test]
    fn relative_inverts_combine_windows(base in windows_root_strategy(), extra in relative_path_strategy()) {
        let joined = combine(&W, &base, &extra);
        prop_assert_eq!(relative(&W, &joined, &base), normalize(&W, &extra));
    }

    // Rooted buffers render the same as normalize
    #[test]
    fn buffer_agrees_with_normalize(path in posix_root_strategy(), tail in messy_strategy()) {
        let full = format!("{path}/{tail}");
        if !full.split('/').any(|c| c.ends_with(':')) {
            let buf = PathBuffer::parse(P, &full).unwrap();
            let rendered = buf.to_string();
            prop_assert_eq!(rendered, normalize(&P, &full));
        }
    }
}
