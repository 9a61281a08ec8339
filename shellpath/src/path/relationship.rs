//! Hierarchical relationship between two paths.
//!
//! Built on [`starts_with_verbatim`] over normalized inputs, so `..` is
//! resolved lexically and names compare per the policy's case rule.

use crate::path::components::starts_with_verbatim;
use crate::path::normalize::normalize;
use crate::policy::PathPolicy;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use shellpath::path::PathRelationship;
/// use shellpath::PathPolicy;
///
/// let posix = PathPolicy::POSIX;
/// assert_eq!(
///     PathRelationship::between(&posix, "/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The second path lies beneath the first.
    Ancestor,

    /// The first path lies beneath the second.
    Descendant,

    /// Both paths normalize to the same location.
    Same,

    /// Neither path contains the other, including paths on different roots.
    Unrelated,
}

impl PathRelationship {
    /// Determine how `path1` relates to `path2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::path::PathRelationship;
    /// use shellpath::PathPolicy;
    ///
    /// let windows = PathPolicy::WINDOWS;
    /// assert_eq!(
    ///     PathRelationship::between(&windows, r"C:\Users\me", r"c:/users"),
    ///     PathRelationship::Descendant
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(&windows, r"C:\a\..\b", r"C:\b\"),
    ///     PathRelationship::Same
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(&windows, r"C:\a", r"D:\a"),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(policy: &PathPolicy, path1: &str, path2: &str) -> Self {
        let p1 = normalize(policy, path1);
        let p2 = normalize(policy, path2);

        let below = starts_with_verbatim(policy, &p1, &p2);
        let above = starts_with_verbatim(policy, &p2, &p1);

        match (above, below) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Returns `true` for everything except `Unrelated`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is inside `directory` or is `directory` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::path::PathRelationship;
    /// use shellpath::PathPolicy;
    ///
    /// let posix = PathPolicy::POSIX;
    /// assert!(PathRelationship::is_within(&posix, "/home/user/file.txt", "/home/user"));
    /// assert!(PathRelationship::is_within(&posix, "/home/user", "/home/user"));
    /// ```
    #[must_use]
    pub fn is_within(policy: &PathPolicy, path: &str, directory: &str) -> bool {
        matches!(
            Self::between(policy, path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if `path` contains `other` or is `other` itself.
    #[must_use]
    pub fn contains(policy: &PathPolicy, path: &str, other: &str) -> bool {
        matches!(
            Self::between(policy, path, other),
            Self::Ancestor | Self::Same
        )
    }

    /// Human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
