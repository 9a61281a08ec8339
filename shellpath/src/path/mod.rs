//! Lexical path algebra.
//!
//! Everything here works on strings and never touches the filesystem. Each
//! operation takes a [`PathPolicy`](crate::PathPolicy) that decides which
//! characters are separators, how names compare, and whether drives and UNC
//! shares exist.
//!
//! # Key Concepts
//!
//! ## Prefixes
//!
//! A path splits into a prefix and a rest. The prefix is what makes a path
//! absolute:
//!
//! - a separator run: `/`, `\`
//! - a drive, real or virtual: `C:`, `C:\`, `env:`, `HKLM:\`
//! - a UNC share: `\\server\share\`
//!
//! An empty prefix means the path is relative.
//!
//! ## Normalization
//!
//! [`normalize`] rewrites separators to the canonical one, drops empty and
//! `.` components, and lets `..` cancel the component before it. The prefix
//! is never cancelled.
//!
//! ## Joining
//!
//! [`combine`] joins two strings the way a shell resolves `cd a; cd b`. On
//! drive-letter platforms a suffix rooted at a bare separator stays on the
//! base's drive. [`PathBuffer`] does the same incrementally.
//!
//! # Examples
//!
//! ```
//! use shellpath::path::{combine, normalize, relative, PathRelationship};
//! use shellpath::PathPolicy;
//!
//! let windows = PathPolicy::WINDOWS;
//! let joined = combine(&windows, r"C:\work\app", r"\temp\..\logs");
//! assert_eq!(normalize(&windows, &joined), r"C:\logs");
//! assert_eq!(relative(&windows, &joined, r"c:\WORK"), r"..\logs");
//!
//! let rel = PathRelationship::between(&windows, r"C:\work", r"C:\work\app");
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

mod buffer;
mod combine;
mod components;
pub mod format;
pub mod normalize;
mod parent;
mod prefix;
mod relationship;
mod relative;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use buffer::PathBuffer;
pub use combine::{combine, combine_normalized};
pub use components::{
    components, components_start_with, starts_with, starts_with_verbatim, strip_prefix,
};
pub use normalize::normalize;
pub use parent::{parent, trim_trailing_separators};
pub use prefix::{is_absolute, is_drive, resolve_prefix, Prefix, PrefixKind};
pub use relationship::PathRelationship;
pub use relative::relative;
