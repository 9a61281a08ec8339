//! Error types for the shellpath library.
//!
//! Path algebra itself is total: normalizing, combining and relativizing
//! never fail. Errors come from the incremental [`PathBuffer`] rejecting a
//! misplaced drive colon, and from loading configuration.
//!
//! [`PathBuffer`]: crate::path::PathBuffer

use thiserror::Error;

/// Result type alias for operations that may fail with a shellpath error.
///
/// # Examples
///
/// ```
/// use shellpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("C:\\".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shellpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A component contains a `:` outside the leading drive slot.
    #[error("paths cannot contain ':' except for drive letters: {path} (component '{component}')")]
    InvalidDriveColon {
        /// The full fragment that was being appended.
        path: String,
        /// The offending component.
        component: String,
    },

    /// An unknown path policy name was given.
    #[error("invalid path policy '{value}': expected one of windows, posix, host")]
    InvalidPolicy {
        /// The rejected value.
        value: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a path format error.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::Error;
    ///
    /// let err = Error::InvalidDriveColon {
    ///     path: "a\\b:c".to_string(),
    ///     component: "b:c".to_string(),
    /// };
    /// assert!(err.is_format_error());
    /// ```
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidDriveColon { .. })
    }

    /// Check if error came from configuration loading or validation.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPolicy { .. } | Self::Validation { .. } | Self::Configuration(_)
        )
    }
}
