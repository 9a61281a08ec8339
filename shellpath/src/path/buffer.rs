//! An incrementally built path.
//!
//! [`PathBuffer`] mirrors how a shell resolves a sequence of `cd`-style
//! fragments: each appended fragment either extends the current location
//! or, when it is rooted, replaces it.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};
use crate::policy::PathPolicy;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// A path held as a list of components.
///
/// A leading empty component ([`PathBuffer::ROOT`]) marks a path rooted at a
/// bare separator. With drive letters enabled, a leading `C:`-style
/// component marks a drive root.
///
/// # Examples
///
/// ```
/// use shellpath::path::PathBuffer;
/// use shellpath::PathPolicy;
///
/// # fn main() -> shellpath::Result<()> {
/// let mut buf = PathBuffer::parse(PathPolicy::POSIX, "/srv/app")?;
/// buf.append("../logs")?;
/// assert_eq!(buf.to_string(), "/srv/logs");
///
/// buf.append("/var/tmp")?;
/// assert_eq!(buf.to_string(), "/var/tmp");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PathBuffer {
    policy: PathPolicy,
    components: Vec<String>,
    normalized: bool,
}

impl PathBuffer {
    /// The component standing for a bare separator root.
    pub const ROOT: &'static str = "";

    /// Creates an empty buffer.
    #[must_use]
    pub fn new(policy: PathPolicy) -> Self {
        Self {
            policy,
            components: Vec::new(),
            normalized: true,
        }
    }

    /// Creates a buffer holding `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDriveColon`] under a drive-letter policy when
    /// a component other than the first contains `:`.
    pub fn parse(policy: PathPolicy, path: &str) -> Result<Self> {
        let mut buf = Self::new(policy);
        buf.append(path)?;
        Ok(buf)
    }

    /// Creates a buffer from `first` and then appends each of `rest`.
    ///
    /// # Errors
    ///
    /// Fails on the first fragment that [`PathBuffer::append`] rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::path::PathBuffer;
    /// use shellpath::PathPolicy;
    ///
    /// let buf = PathBuffer::join(PathPolicy::WINDOWS, r"C:\work", &["src", r"\tmp", "x"]).unwrap();
    /// assert_eq!(buf.to_string(), r"\tmp\x");
    /// ```
    pub fn join<S: AsRef<str>>(policy: PathPolicy, first: &str, rest: &[S]) -> Result<Self> {
        let mut buf = Self::parse(policy, first)?;
        for fragment in rest {
            buf.append(fragment.as_ref())?;
        }
        Ok(buf)
    }

    /// The policy this buffer splits and renders with.
    #[must_use]
    pub fn policy(&self) -> &PathPolicy {
        &self.policy
    }

    /// True when the buffer holds no components at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Appends a path fragment.
    ///
    /// A fragment starting with a separator replaces the buffer with a bare
    /// root; under a drive-letter policy a fragment whose first piece ends in
    /// `:` replaces it with that drive. Empty and `.` pieces are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDriveColon`] under a drive-letter policy when
    /// any other piece contains `:`. The buffer may already have been reset
    /// by then and should be discarded.
    pub fn append(&mut self, fragment: &str) -> Result<()> {
        self.normalized = false;

        if fragment.starts_with(self.policy.separators()) {
            log::trace!("rooted fragment {fragment} resets the buffer");
            self.components.clear();
            self.components.push(Self::ROOT.to_string());
        }

        for (i, piece) in self.policy.split(fragment).enumerate() {
            if piece.is_empty() {
                continue;
            }

            if self.policy.supports_drive_letters() {
                match piece.rfind(':') {
                    Some(colon) if i == 0 && colon == piece.len() - 1 => {
                        log::trace!("drive {piece} resets the buffer");
                        self.components.clear();
                        self.components.push(piece.to_string());
                        continue;
                    }
                    Some(_) => {
                        log::debug!("rejecting '{piece}' in {fragment}: misplaced drive colon");
                        return Err(Error::InvalidDriveColon {
                            path: fragment.to_string(),
                            component: piece.to_string(),
                        });
                    }
                    None => {}
                }
            }

            if piece != CURRENT_DIR {
                self.components.push(piece.to_string());
            }
        }

        Ok(())
    }

    /// Removes and returns the last component, after normalizing.
    ///
    /// Popping a lone root clears the buffer and returns the canonical
    /// separator. Popping an empty buffer returns `""`.
    pub fn pop(&mut self) -> String {
        self.normalize();

        if self.components.len() == 1 && self.components[0] == Self::ROOT {
            self.components.clear();
            return self.policy.separator().to_string();
        }
        self.components.pop().unwrap_or_default()
    }

    /// Resolves `.` and `..` in place.
    ///
    /// `..` never cancels the root, nor a drive that is the first
    /// component, so `/..` stays `/..`.
    pub fn normalize(&mut self) {
        if self.normalized {
            return;
        }
        self.components = fold(&self.policy, &self.components);
        self.normalized = true;
    }

    /// The normalized components, with [`PathBuffer::ROOT`] first for a
    /// separator-rooted path.
    pub fn components(&mut self) -> &[String] {
        self.normalize();
        &self.components
    }

    /// The rendered parent, or `""` when there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::path::PathBuffer;
    /// use shellpath::PathPolicy;
    ///
    /// let buf = PathBuffer::parse(PathPolicy::WINDOWS, r"C:\Users").unwrap();
    /// assert_eq!(buf.parent(), r"C:\");
    /// ```
    #[must_use]
    pub fn parent(&self) -> String {
        let mut up = self.clone();
        if up.pop().is_empty() || up.is_empty() {
            return String::new();
        }
        up.to_string()
    }

    fn folded(&self) -> Cow<'_, [String]> {
        if self.normalized {
            Cow::Borrowed(&self.components)
        } else {
            Cow::Owned(fold(&self.policy, &self.components))
        }
    }
}

fn fold(policy: &PathPolicy, components: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(components.len());
    for component in components {
        match component.as_str() {
            CURRENT_DIR => {}
            PARENT_DIR if !out.is_empty() => {
                let pinned = out.last().is_some_and(|last| {
                    last == PARENT_DIR
                        || last == PathBuffer::ROOT
                        || (policy.supports_drive_letters() && out.len() == 1 && last.ends_with(':'))
                });
                if pinned {
                    out.push(component.clone());
                } else {
                    out.pop();
                }
            }
            _ => out.push(component.clone()),
        }
    }
    out
}

impl fmt::Display for PathBuffer {
    /// Renders with the canonical separator. A lone drive gets a trailing
    /// separator; an empty buffer renders as `""`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.folded();
        let sep = self.policy.separator();

        match components.as_ref() {
            [only] if only == Self::ROOT => write!(f, "{sep}"),
            [only] if self.policy.supports_drive_letters() && only.ends_with(':') => {
                write!(f, "{only}{sep}")
            }
            parts => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{sep}")?;
                    }
                    f.write_str(part)?;
                }
                Ok(())
            }
        }
    }
}
