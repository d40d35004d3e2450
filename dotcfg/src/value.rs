//! Values held by nested (JSON and YAML) documents.
//!
//! A [`Node`] is either a scalar leaf, a sequence, or a mapping. Every node
//! can be rendered to a string: scalars render as their plain text, and
//! sequences and mappings render as compact JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A mapping from keys to nested values.
pub type NestedMap = BTreeMap<String, Node>;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// An explicit null (`null` in JSON, `~` or empty in YAML).
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer. Wide enough for both signed and unsigned 64-bit values.
    Integer(i128),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => match serde_json::Number::from_f64(*x) {
                Some(number) => write!(f, "{number}"),
                None => write!(f, "{x}"),
            },
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A node in a nested document.
///
/// # Examples
///
/// ```
/// use dotcfg::{Node, Scalar};
/// use std::collections::BTreeMap;
///
/// let leaf = Node::Scalar(Scalar::Integer(22));
/// assert_eq!(leaf.to_string(), "22");
///
/// let mut map = BTreeMap::new();
/// map.insert("foo".to_string(), Node::Scalar(Scalar::String("bar".to_string())));
/// assert_eq!(Node::Map(map).to_string(), r#"{"foo":"bar"}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf value.
    Scalar(Scalar),
    /// An ordered list of nodes.
    Sequence(Vec<Node>),
    /// A mapping of keys to nodes.
    Map(NestedMap),
}

impl Node {
    /// Returns the mapping if this node is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&NestedMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a short name for the kind of node, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "boolean",
            Self::Scalar(Scalar::Integer(_)) => "integer",
            Self::Scalar(Scalar::Float(_)) => "float",
            Self::Scalar(Scalar::String(_)) => "string",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "mapping",
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::Sequence(_) | Self::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i128(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}
