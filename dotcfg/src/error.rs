//! Error types for the dotcfg library.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! crate-wide [`Error`] enum built with `thiserror`.

use thiserror::Error;

use crate::decode::DecodeError;

/// Result type alias for operations that may fail with a dotcfg error.
///
/// # Examples
///
/// ```
/// use dotcfg::{Error, Result};
///
/// fn lookup() -> Result<String> {
///     Err(Error::KeyNotFound {
///         key: "port".to_string(),
///         section: None,
///     })
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dotcfg library.
#[derive(Debug, Error)]
pub enum Error {
    /// The format tag (or file extension) is not one of the supported formats.
    #[error("unsupported file type {tag:?}")]
    UnsupportedFormat {
        /// The tag that was not recognized.
        tag: String,
    },

    /// The content is malformed for the declared format.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The requested key is not present.
    #[error("key {key:?} not found{}", in_section(.section.as_deref()))]
    KeyNotFound {
        /// The key that was looked up. For sectioned files this is the part
        /// after the section name.
        key: String,
        /// The section that was searched, when the key named one.
        section: Option<String>,
    },

    /// A value was found but could not be converted to the requested type.
    #[error("invalid value {value:?} for key {key:?}: {message}")]
    InvalidValue {
        /// The key that was looked up.
        key: String,
        /// The raw string value.
        value: String,
        /// Why the conversion failed.
        message: String,
    },
}

fn in_section(section: Option<&str>) -> String {
    section
        .map(|name| format!(" in section {name:?}"))
        .unwrap_or_default()
}

impl Error {
    /// Check if error indicates a missing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::Error;
    ///
    /// let err = Error::KeyNotFound { key: "foo".to_string(), section: None };
    /// assert!(err.is_key_not_found());
    /// ```
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    /// Check if error is an unrecognized format tag.
    #[must_use]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Check if error came from a format decoder.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Check if error came from reading the file.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
