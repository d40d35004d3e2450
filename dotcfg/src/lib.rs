#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dotcfg
//!
//! A reader for configuration files that exposes every supported format
//! through one dotted-key lookup returning a string.
//!
//! ## Formats
//!
//! - `conf`: flat `key = value` lines; keys are matched verbatim
//! - `ini`: sections of `key = value` pairs; `section.key`
//! - `json` and `yaml`: nested mappings; `a.b.c`
//!
//! ## Core Types
//!
//! - [`ParsedConfig`]: decoded content with [`get`](ParsedConfig::get)
//! - [`ConfigLoader`] and [`FileReader`]: reading files, with an injectable reader
//! - [`FileType`] and [`Format`]: format tags
//! - [`Node`] and [`Scalar`]: values of nested documents
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use dotcfg::ParsedConfig;
//!
//! let config = ParsedConfig::from_tag("json", br#"{"section1": {"foo": "bar"}, "plain": "top"}"#)
//!     .unwrap();
//!
//! assert_eq!(config.get("section1.foo").unwrap(), "bar");
//! assert_eq!(config.get("plain").unwrap(), "top");
//! assert!(config.get("missing").unwrap_err().is_key_not_found());
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod loader;
pub mod value;

// Re-export key types at crate root for convenience
pub use config::ParsedConfig;
pub use decode::{DecodeError, FlatMap, SectionTable, Shape};
pub use error::{Error, Result};
pub use format::{FileType, Format};
pub use loader::{load, ConfigLoader, FileReader, FsReader};
pub use value::{NestedMap, Node, Scalar};
