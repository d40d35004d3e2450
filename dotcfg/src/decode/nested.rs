//! Decoders for nested JSON and YAML documents.
//!
//! Both encodings decode into the same [`NestedMap`], so lookups behave the
//! same regardless of which one a file uses.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use super::DecodeError;
use crate::format::FileType;
use crate::value::{NestedMap, Node, Scalar};

/// Decodes a JSON document whose top level is an object.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON and
/// [`DecodeError::NotAMapping`] when the top level is not an object.
pub fn decode_json(text: &str) -> Result<NestedMap, DecodeError> {
    let value: JsonValue = serde_json::from_str(text)?;

    match json_node(value) {
        Node::Map(map) => Ok(map),
        other => Err(DecodeError::NotAMapping {
            file_type: FileType::Json,
            found: other.kind(),
        }),
    }
}

/// Decodes a YAML document whose top level is a mapping.
///
/// Merge keys (`<<: *anchor`) are applied before conversion. A document that
/// holds nothing but comments or whitespace decodes to an empty mapping.
///
/// # Errors
///
/// Returns [`DecodeError::Yaml`] for malformed YAML,
/// [`DecodeError::NotAMapping`] when the top level is not a mapping, and
/// [`DecodeError::UnsupportedKey`] when a mapping key is a sequence or mapping.
pub fn decode_yaml(text: &str) -> Result<NestedMap, DecodeError> {
    if is_blank_yaml(text) {
        return Ok(NestedMap::new());
    }

    let mut value: YamlValue = serde_yaml::from_str(text)?;
    value.apply_merge()?;

    match yaml_node(value)? {
        Node::Map(map) => Ok(map),
        Node::Scalar(Scalar::Null) => Ok(NestedMap::new()),
        other => Err(DecodeError::NotAMapping {
            file_type: FileType::Yaml,
            found: other.kind(),
        }),
    }
}

fn is_blank_yaml(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

fn json_node(value: JsonValue) -> Node {
    match value {
        JsonValue::Null => Scalar::Null.into(),
        JsonValue::Bool(b) => Scalar::Bool(b).into(),
        JsonValue::Number(n) => json_number(&n).into(),
        JsonValue::String(s) => Scalar::String(s).into(),
        JsonValue::Array(items) => Node::Sequence(items.into_iter().map(json_node).collect()),
        JsonValue::Object(object) => Node::Map(
            object
                .into_iter()
                .map(|(key, value)| (key, json_node(value)))
                .collect(),
        ),
    }
}

fn json_number(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i.into())
    } else if let Some(u) = n.as_u64() {
        Scalar::Integer(u.into())
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn yaml_node(value: YamlValue) -> Result<Node, DecodeError> {
    let node = match value {
        YamlValue::Null => Scalar::Null.into(),
        YamlValue::Bool(b) => Scalar::Bool(b).into(),
        YamlValue::Number(n) => yaml_number(&n).into(),
        YamlValue::String(s) => Scalar::String(s).into(),
        YamlValue::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(yaml_node)
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = NestedMap::new();
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_node(value)?);
            }
            Node::Map(map)
        }
        YamlValue::Tagged(tagged) => yaml_node(tagged.value)?,
    };
    Ok(node)
}

fn yaml_number(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i.into())
    } else if let Some(u) = n.as_u64() {
        Scalar::Integer(u.into())
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn yaml_key(key: YamlValue) -> Result<String, DecodeError> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Tagged(tagged) => yaml_key(tagged.value),
        YamlValue::Sequence(_) => Err(DecodeError::UnsupportedKey {
            file_type: FileType::Yaml,
            found: "sequence",
        }),
        YamlValue::Mapping(_) => Err(DecodeError::UnsupportedKey {
            file_type: FileType::Yaml,
            found: "mapping",
        }),
        scalar => Ok(yaml_node(scalar)?.to_string()),
    }
}
