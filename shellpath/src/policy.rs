//! Platform path policies.
//!
//! A [`PathPolicy`] captures the handful of facts that make path strings
//! behave differently between operating systems: which characters separate
//! components, whether names compare case-insensitively, and whether drive
//! letters and UNC shares exist. Every operation in [`crate::path`] takes a
//! policy explicitly, so both flavours can be exercised from one binary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Path semantics for one platform.
///
/// # Examples
///
/// ```
/// use shellpath::PathPolicy;
///
/// let windows = PathPolicy::WINDOWS;
/// assert_eq!(windows.separator(), '\\');
/// assert!(windows.is_separator('/'));
/// assert!(windows.names_eq("Users", "USERS"));
///
/// let posix = PathPolicy::POSIX;
/// assert!(!posix.is_separator('\\'));
/// assert!(!posix.names_eq("Users", "USERS"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathPolicy {
    separators: &'static [char],
    case_sensitive: bool,
    supports_drive_letters: bool,
    supports_unc: bool,
}

impl PathPolicy {
    /// Windows: `\` and `/`, case-insensitive, drive letters and UNC shares.
    pub const WINDOWS: Self = Self {
        separators: &['\\', '/'],
        case_sensitive: false,
        supports_drive_letters: true,
        supports_unc: true,
    };

    /// POSIX: `/` only, case-sensitive. Virtual drives such as `env:` are
    /// still recognized as prefixes.
    pub const POSIX: Self = Self {
        separators: &['/'],
        case_sensitive: true,
        supports_drive_letters: false,
        supports_unc: false,
    };

    /// Builds a custom policy. The first separator is the canonical one.
    ///
    /// # Panics
    ///
    /// Panics if `separators` is empty.
    #[must_use]
    pub const fn new(
        separators: &'static [char],
        case_sensitive: bool,
        supports_drive_letters: bool,
        supports_unc: bool,
    ) -> Self {
        assert!(!separators.is_empty(), "a path policy needs a separator");
        Self {
            separators,
            case_sensitive,
            supports_drive_letters,
            supports_unc,
        }
    }

    /// The policy of the operating system this binary was built for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    /// The canonical separator used when rendering paths.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separators[0]
    }

    /// All characters recognized as separators.
    #[must_use]
    pub const fn separators(&self) -> &'static [char] {
        self.separators
    }

    /// Whether names compare case-sensitively.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether `C:`-style drives take part in joining and buffer appends.
    #[must_use]
    pub const fn supports_drive_letters(&self) -> bool {
        self.supports_drive_letters
    }

    /// Whether `\\server\share\` prefixes are recognized.
    #[must_use]
    pub const fn supports_unc(&self) -> bool {
        self.supports_unc
    }

    /// Whether `c` separates path components.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Compares two names (components or prefixes) per the case policy.
    #[must_use]
    pub fn names_eq(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase))
        }
    }

    /// Rewrites every separator in `s` to the canonical one.
    #[must_use]
    pub fn canonicalize_separators(&self, s: &str) -> String {
        let sep = self.separator();
        s.chars()
            .map(|c| if self.is_separator(c) { sep } else { c })
            .collect()
    }

    /// Strips leading separators.
    #[must_use]
    pub fn trim_start_separators<'a>(&self, s: &'a str) -> &'a str {
        s.trim_start_matches(self.separators)
    }

    /// Strips trailing separators.
    #[must_use]
    pub fn trim_end_separators<'a>(&self, s: &'a str) -> &'a str {
        s.trim_end_matches(self.separators)
    }

    /// Byte index of the first separator at or after `from`.
    #[must_use]
    pub fn find_separator(&self, s: &str, from: usize) -> Option<usize> {
        s.get(from..)?
            .find(self.separators)
            .map(|i| i + from)
    }

    /// Splits `s` on every separator, keeping empty pieces.
    pub fn split<'a>(&self, s: &'a str) -> impl Iterator<Item = &'a str> {
        s.split(self.separators)
    }
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self::host()
    }
}

/// A named policy choice, as found in configuration and on the command line.
///
/// # Examples
///
/// ```
/// use shellpath::{PathPolicy, PolicyKind};
///
/// let kind: PolicyKind = "Windows".parse().unwrap();
/// assert_eq!(kind.policy(), PathPolicy::WINDOWS);
/// assert_eq!(kind.to_string(), "windows");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Windows-style paths.
    Windows,
    /// POSIX-style paths.
    Posix,
    /// Whatever the running operating system uses.
    #[default]
    Host,
}

impl PolicyKind {
    /// Resolves the choice to a concrete policy.
    #[must_use]
    pub const fn policy(self) -> PathPolicy {
        match self {
            Self::Windows => PathPolicy::WINDOWS,
            Self::Posix => PathPolicy::POSIX,
            Self::Host => PathPolicy::host(),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
            Self::Host => write!(f, "host"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "posix" | "unix" => Ok(Self::Posix),
            "host" => Ok(Self::Host),
            _ => Err(Error::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}
