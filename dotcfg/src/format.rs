//! Format tags.
//!
//! A [`FileType`] names the wire encoding of a file, while a [`Format`] names
//! the addressing rule used to look keys up in it. JSON and YAML are two
//! encodings of the same nested format.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The addressing rule applied by [`ParsedConfig::get`](crate::ParsedConfig::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Single-level namespace; keys are matched verbatim.
    Flat,
    /// Named sections of flat mappings; `section.key`.
    Sectioned,
    /// Arbitrarily deep mapping; `a.b.c`.
    Nested,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Sectioned => write!(f, "sectioned"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

/// The encoding of a configuration file.
///
/// Parsing accepts the canonical tags (`conf`, `ini`, `json`, `yaml`) as well
/// as the descriptive aliases `flat`, `sectioned`, `nested-json`, `yml` and
/// `nested-yaml`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use dotcfg::{FileType, Format};
///
/// let file_type: FileType = "yaml".parse().unwrap();
/// assert_eq!(file_type, FileType::Yaml);
/// assert_eq!(file_type.format(), Format::Nested);
///
/// assert!("toml".parse::<FileType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileType {
    /// Flat `key = value` lines.
    Conf,
    /// INI-style sections.
    Ini,
    /// JSON document with an object at the top level.
    Json,
    /// YAML document with a mapping at the top level.
    Yaml,
}

impl FileType {
    /// All supported file types.
    pub const ALL: [Self; 4] = [Self::Conf, Self::Ini, Self::Json, Self::Yaml];

    /// Returns the addressing rule for this encoding.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Self::Conf => Format::Flat,
            Self::Ini => Format::Sectioned,
            Self::Json | Self::Yaml => Format::Nested,
        }
    }

    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conf => "conf",
            Self::Ini => "ini",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Infers the file type from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the extension is missing or
    /// not one of `conf`, `cfg`, `ini`, `json`, `yaml` or `yml`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::FileType;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileType::from_path(Path::new("app.yml")).unwrap(), FileType::Yaml);
    /// assert!(FileType::from_path(Path::new("Makefile")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(OsStr::to_str).unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "conf" | "cfg" => Ok(Self::Conf),
            "ini" => Ok(Self::Ini),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                tag: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "conf" | "flat" => Ok(Self::Conf),
            "ini" | "sectioned" => Ok(Self::Ini),
            "json" | "nested-json" => Ok(Self::Json),
            "yaml" | "yml" | "nested-yaml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat { tag: s.to_string() }),
        }
    }
}

impl TryFrom<String> for FileType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FileType> for String {
    fn from(file_type: FileType) -> Self {
        file_type.as_str().to_string()
    }
}
