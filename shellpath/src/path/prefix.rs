//! Prefix detection.
//!
//! Every path string splits into a *prefix* that says where the path is
//! rooted and a *rest* holding its components. The prefix can be empty
//! (relative path), a run of separators, a drive such as `C:\` or a shell
//! virtual drive such as `env:`, or a UNC share like `\\server\share\`.

use std::fmt;

use crate::policy::PathPolicy;

/// Characters a drive name may not contain.
const DRIVE_DISALLOWED: &[char] = &[';', '~', '/', '\\', '.', ':'];

/// Separators accepted after a drive name regardless of policy.
const DRIVE_SEPARATORS: &[char] = &['/', '\\'];

/// Classification of a [`Prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    /// No prefix; the path is relative.
    None,
    /// One or more bare separators.
    Root,
    /// A drive letter or virtual drive, with or without a trailing separator.
    Drive,
    /// A `\\server\share\` network prefix.
    Unc,
}

/// The root-indicating part of a path, borrowed from the input.
///
/// # Examples
///
/// ```
/// use shellpath::path::{resolve_prefix, PrefixKind};
/// use shellpath::PathPolicy;
///
/// let (prefix, rest) = resolve_prefix(&PathPolicy::WINDOWS, r"C:\Users\me");
/// assert_eq!(prefix.as_str(), r"C:\");
/// assert_eq!(prefix.kind(), PrefixKind::Drive);
/// assert_eq!(rest, r"Users\me");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix<'a> {
    raw: &'a str,
    kind: PrefixKind,
}

impl<'a> Prefix<'a> {
    const fn new(raw: &'a str, kind: PrefixKind) -> Self {
        Self { raw, kind }
    }

    const fn none() -> Self {
        Self::new("", PrefixKind::None)
    }

    /// The prefix text exactly as it appeared in the input.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// What kind of root this prefix denotes.
    #[must_use]
    pub const fn kind(&self) -> PrefixKind {
        self.kind
    }

    /// True for relative paths.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Compares two prefixes per the policy, ignoring which separator
    /// characters they were written with. `\\srv\share` and
    /// `\\srv\share\` name the same share.
    #[must_use]
    pub fn matches(&self, policy: &PathPolicy, other: &Prefix<'_>) -> bool {
        policy.names_eq(&self.comparable(policy), &other.comparable(policy))
    }

    fn comparable(&self, policy: &PathPolicy) -> String {
        let canonical = policy.canonicalize_separators(self.raw);
        match self.kind {
            PrefixKind::Unc => policy.trim_end_separators(&canonical).to_string(),
            _ => canonical,
        }
    }
}

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Whether `s` names a drive: `C:`, `C:\`, or a virtual drive like `env:/`.
///
/// One trailing `/` or `\` is ignored; what remains must end in `:` and
/// the name before it must be non-empty and free of `; ~ / \ . :`.
///
/// # Examples
///
/// ```
/// use shellpath::path::is_drive;
///
/// assert!(is_drive("C:"));
/// assert!(is_drive(r"C:\"));
/// assert!(is_drive("variable:/"));
/// assert!(!is_drive("my.drive:"));
/// assert!(!is_drive(":"));
/// ```
#[must_use]
pub fn is_drive(s: &str) -> bool {
    if s.len() < 2 {
        return false;
    }
    let body = s.strip_suffix(DRIVE_SEPARATORS).unwrap_or(s);
    match body.strip_suffix(':') {
        Some(name) => !name.is_empty() && !name.contains(DRIVE_DISALLOWED),
        None => false,
    }
}

/// Splits `path` into its prefix and the remaining relative part.
///
/// Policies with drive-letter support use Windows rules (UNC shares,
/// separator runs, drives). Others use POSIX rules, where only a leading
/// `/` or a virtual drive forms a prefix.
///
/// # Examples
///
/// ```
/// use shellpath::path::resolve_prefix;
/// use shellpath::PathPolicy;
///
/// let (prefix, rest) = resolve_prefix(&PathPolicy::WINDOWS, r"\\server\share\dir");
/// assert_eq!(prefix.as_str(), r"\\server\share\");
/// assert_eq!(rest, "dir");
///
/// let (prefix, rest) = resolve_prefix(&PathPolicy::POSIX, "env:FOO/BAR");
/// assert_eq!(prefix.as_str(), "env:");
/// assert_eq!(rest, "FOO/BAR");
///
/// let (prefix, rest) = resolve_prefix(&PathPolicy::POSIX, "///usr//lib");
/// assert_eq!(prefix.as_str(), "/");
/// assert_eq!(rest, "usr//lib");
/// ```
#[must_use]
pub fn resolve_prefix<'a>(policy: &PathPolicy, path: &'a str) -> (Prefix<'a>, &'a str) {
    if policy.supports_drive_letters() {
        resolve_windows(policy, path)
    } else {
        resolve_posix(policy, path)
    }
}

/// Whether a separator goes between `prefix` and the components after it.
///
/// A drive written without a separator (`env:FOO`) is joined directly, and a
/// drive that carries its own `/` or `\` keeps it.
pub(crate) fn needs_separator(policy: &PathPolicy, prefix: &str) -> bool {
    !prefix.is_empty()
        && !prefix.ends_with(|c| policy.is_separator(c) || c == ':' || DRIVE_SEPARATORS.contains(&c))
}

/// Whether `path` has any prefix.
#[must_use]
pub fn is_absolute(policy: &PathPolicy, path: &str) -> bool {
    !resolve_prefix(policy, path).0.is_empty()
}

fn resolve_posix<'a>(policy: &PathPolicy, path: &'a str) -> (Prefix<'a>, &'a str) {
    if path.starts_with(policy.separators()) {
        let sep_len = path.chars().next().map_or(0, char::len_utf8);
        return (
            Prefix::new(&path[..sep_len], PrefixKind::Root),
            policy.trim_start_separators(path),
        );
    }

    // Virtual drives may be written with either slash, even here.
    let first_sep = path.find(|c| policy.is_separator(c) || DRIVE_SEPARATORS.contains(&c));
    match first_sep {
        Some(i) if i > 1 && is_drive(&path[..=i]) => (
            Prefix::new(&path[..=i], PrefixKind::Drive),
            policy.trim_start_separators(&path[i + 1..]),
        ),
        None if is_drive(path) => (Prefix::new(path, PrefixKind::Drive), ""),
        _ => {
            let first = &path[..first_sep.unwrap_or(path.len())];
            match first.find(':') {
                Some(colon) if is_drive(&path[..=colon]) => (
                    Prefix::new(&path[..=colon], PrefixKind::Drive),
                    policy.trim_start_separators(&path[colon + 1..]),
                ),
                _ => (Prefix::none(), path),
            }
        }
    }
}

fn resolve_windows<'a>(policy: &PathPolicy, path: &'a str) -> (Prefix<'a>, &'a str) {
    if policy.supports_unc() && starts_with_double_separator(policy, path) {
        return match policy.find_separator(path, 2) {
            None if path.len() > 2 => split_separator_run(policy, path),
            None => (Prefix::new(path, PrefixKind::Root), ""),
            // Three or more leading separators cannot start a UNC path.
            Some(2) => split_separator_run(policy, path),
            Some(server_end) => match policy.find_separator(path, server_end + 1) {
                Some(share_end) => (
                    Prefix::new(&path[..=share_end], PrefixKind::Unc),
                    &path[share_end + 1..],
                ),
                None => (Prefix::new(path, PrefixKind::Unc), ""),
            },
        };
    }

    match policy.find_separator(path, 0) {
        Some(0) => split_separator_run(policy, path),
        None if is_drive(path) => (Prefix::new(path, PrefixKind::Drive), ""),
        None => (Prefix::none(), path),
        Some(i) => {
            let head = &path[..=i];
            if is_drive(head) {
                (
                    Prefix::new(head, PrefixKind::Drive),
                    policy.trim_start_separators(&path[i + 1..]),
                )
            } else {
                // The separator belongs to a relative component.
                (Prefix::none(), path)
            }
        }
    }
}

fn starts_with_double_separator(policy: &PathPolicy, path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(a), Some(b)) if policy.is_separator(a) && policy.is_separator(b)
    )
}

fn split_separator_run<'a>(policy: &PathPolicy, path: &'a str) -> (Prefix<'a>, &'a str) {
    let end = path
        .find(|c| !policy.is_separator(c))
        .unwrap_or(path.len());
    (Prefix::new(&path[..end], PrefixKind::Root), &path[end..])
}
