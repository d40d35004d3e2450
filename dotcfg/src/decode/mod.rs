//! Format decoders.
//!
//! Decoding turns raw bytes into one of three [`Shape`]s, chosen by the
//! declared [`FileType`]:
//!
//! - [`FileType::Conf`] produces a [`FlatMap`]
//! - [`FileType::Ini`] produces a [`SectionTable`]
//! - [`FileType::Json`] and [`FileType::Yaml`] produce a [`NestedMap`]
//!
//! The INI, JSON and YAML grammars are handled by `rust-ini`, `serde_json` and
//! `serde_yaml`; their errors are carried unchanged inside [`DecodeError`].

pub mod flat;
pub mod nested;
pub mod sectioned;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::format::{FileType, Format};
use crate::value::NestedMap;

/// Flat `key -> value` mapping.
pub type FlatMap = BTreeMap<String, String>;

/// Section name to flat mapping. The unnamed section is stored under `""`.
pub type SectionTable = BTreeMap<String, FlatMap>;

/// Decoded content, one variant per addressing rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Content of a flat file.
    Flat(FlatMap),
    /// Content of a sectioned file.
    Sectioned(SectionTable),
    /// Content of a nested document.
    Nested(NestedMap),
}

impl Shape {
    /// Returns the addressing rule that applies to this shape.
    #[must_use]
    pub const fn format(&self) -> Format {
        match self {
            Self::Flat(_) => Format::Flat,
            Self::Sectioned(_) => Format::Sectioned,
            Self::Nested(_) => Format::Nested,
        }
    }
}

/// Content could not be decoded as the declared format.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not valid UTF-8.
    #[error("content is not valid UTF-8")]
    InvalidUtf8,

    /// Malformed INI content.
    #[error("invalid ini: {0}")]
    Ini(#[from] ini::ParseError),

    /// Malformed JSON content.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML content.
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A nested document whose top level is not a mapping.
    #[error("expected a mapping at the top level of the {file_type} document, found {found}")]
    NotAMapping {
        /// The encoding of the document.
        file_type: FileType,
        /// The kind of value found instead.
        found: &'static str,
    },

    /// A mapping key that cannot be turned into a string.
    #[error("{file_type} mapping keys must be scalars, found {found}")]
    UnsupportedKey {
        /// The encoding of the document.
        file_type: FileType,
        /// The kind of value used as a key.
        found: &'static str,
    },
}

/// Decodes `content` according to `file_type`.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the content is not UTF-8 or is malformed for
/// the declared format.
///
/// # Examples
///
/// ```
/// use dotcfg::decode::{decode, Shape};
/// use dotcfg::FileType;
///
/// let shape = decode(FileType::Conf, b"port = 8080\n").unwrap();
/// match shape {
///     Shape::Flat(map) => assert_eq!(map["port"], "8080"),
///     _ => unreachable!(),
/// }
/// ```
pub fn decode(file_type: FileType, content: &[u8]) -> Result<Shape, DecodeError> {
    let text = std::str::from_utf8(content).map_err(|_| DecodeError::InvalidUtf8)?;

    match file_type {
        FileType::Conf => Ok(Shape::Flat(flat::decode(text))),
        FileType::Ini => sectioned::decode(text).map(Shape::Sectioned),
        FileType::Json => nested::decode_json(text).map(Shape::Nested),
        FileType::Yaml => nested::decode_yaml(text).map(Shape::Nested),
    }
}
