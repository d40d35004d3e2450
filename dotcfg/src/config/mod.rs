//! The unified accessor.
//!
//! A [`ParsedConfig`] holds the decoded content of one file and answers
//! dotted-key lookups against it. How a key is interpreted depends on the
//! file's [`Format`]:
//!
//! - **Flat**: the key is matched verbatim, dots included.
//! - **Sectioned**: a key without a dot names an entry in the unnamed
//!   section; otherwise the text before the first dot names the section and
//!   the rest is matched literally inside it.
//! - **Nested**: the key is split on every dot and each segment selects a
//!   child mapping. The node at the end of the path is rendered to a string,
//!   so a path that stops at a mapping yields that mapping as compact JSON.
//!
//! # Examples
//!
//! ```
//! use dotcfg::{FileType, ParsedConfig};
//!
//! let ini = ParsedConfig::from_bytes(FileType::Ini, b"[db]\nhost = localhost\n").unwrap();
//! assert_eq!(ini.get("db.host").unwrap(), "localhost");
//!
//! let yaml = ParsedConfig::from_bytes(FileType::Yaml, b"db:\n  port: 5432\n").unwrap();
//! assert_eq!(yaml.get("db.port").unwrap(), "5432");
//! assert!(yaml.get("db.user").is_err());
//! ```

mod lookup;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt::Display;
use std::str::FromStr;

use crate::decode::{self, Shape};
use crate::error::{Error, Result};
use crate::format::{FileType, Format};

/// Decoded content of a configuration file.
///
/// Built once and read-only afterwards; it is `Send + Sync`, so a shared
/// reference can serve lookups from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedConfig {
    file_type: FileType,
    shape: Shape,
}

impl ParsedConfig {
    /// Decodes `content` as `file_type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the content is malformed for the format.
    pub fn from_bytes(file_type: FileType, content: &[u8]) -> Result<Self> {
        let shape = decode::decode(file_type, content)?;
        Ok(Self { file_type, shape })
    }

    /// Decodes `content` using a format tag such as `"ini"` or `"yaml"`.
    ///
    /// The tag is checked before the content is looked at.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for an unknown tag and
    /// [`Error::Decode`] for malformed content.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::ParsedConfig;
    ///
    /// let config = ParsedConfig::from_tag("conf", b"key1=value1\n").unwrap();
    /// assert_eq!(config.get("key1").unwrap(), "value1");
    ///
    /// let err = ParsedConfig::from_tag("toml", b"").unwrap_err();
    /// assert!(err.is_unsupported_format());
    /// ```
    pub fn from_tag(tag: &str, content: &[u8]) -> Result<Self> {
        let file_type: FileType = tag.parse()?;
        Self::from_bytes(file_type, content)
    }

    /// Returns the encoding the content was decoded from.
    #[must_use]
    pub const fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Returns the addressing rule used by [`get`](Self::get).
    #[must_use]
    pub const fn format(&self) -> Format {
        self.shape.format()
    }

    /// Returns the decoded content.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Looks up a dotted key and returns its value as a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key does not resolve. For
    /// sectioned files the error carries the section name separately.
    pub fn get(&self, key: &str) -> Result<String> {
        let result = lookup::get(&self.shape, key);
        if let Err(err) = &result {
            log::trace!("{} lookup failed: {err}", self.file_type);
        }
        result
    }

    /// Looks up a dotted key, falling back to `default` when it is missing.
    #[must_use]
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|_| default.to_string())
    }

    /// Looks up a dotted key and parses the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key does not resolve and
    /// [`Error::InvalidValue`] if the value does not parse as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::ParsedConfig;
    ///
    /// let config = ParsedConfig::from_tag("json", br#"{"server": {"port": 8080}}"#).unwrap();
    /// let port: u16 = config.get_as("server.port").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn get_as<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.get(key)?;
        value.parse::<T>().map_err(|err| Error::InvalidValue {
            key: key.to_string(),
            message: err.to_string(),
            value,
        })
    }

    /// Returns true if `key` resolves.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        lookup::get(&self.shape, key).is_ok()
    }

    /// Returns every key that [`get`](Self::get) can resolve, sorted.
    ///
    /// Nested mappings are expanded down to their leaves. Entries whose names
    /// contain a dot in a position the addressing rule would split on are
    /// left out, since no key can reach them.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        lookup::keys(&self.shape)
    }

    /// Returns the number of keys listed by [`keys`](Self::keys).
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns true if no key resolves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
