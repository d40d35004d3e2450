//! Addressing rules, one per shape.
//!
//! Each rule resolves a dotted key against its shape and, for [`keys`], lists
//! every key the rule can reach.

use crate::decode::{FlatMap, SectionTable, Shape};
use crate::error::{Error, Result};
use crate::value::{NestedMap, Node};

/// Resolves `key` against `shape` and renders the value.
pub(super) fn get(shape: &Shape, key: &str) -> Result<String> {
    match shape {
        Shape::Flat(map) => flat(map, key),
        Shape::Sectioned(table) => sectioned(table, key),
        Shape::Nested(map) => nested(map, key),
    }
}

/// Lists every reachable key of `shape` in sorted order.
pub(super) fn keys(shape: &Shape) -> Vec<String> {
    let mut keys: Vec<String> = match shape {
        Shape::Flat(map) => map.keys().cloned().collect(),
        Shape::Sectioned(table) => section_keys(table),
        Shape::Nested(map) => {
            let mut keys = Vec::new();
            collect_nested_keys(map, None, &mut keys);
            keys
        }
    };
    keys.sort();
    keys
}

fn flat(map: &FlatMap, key: &str) -> Result<String> {
    map.get(key).cloned().ok_or_else(|| Error::KeyNotFound {
        key: key.to_string(),
        section: None,
    })
}

/// Only the first dot separates section from key; the rest of the key is
/// matched literally.
fn sectioned(table: &SectionTable, key: &str) -> Result<String> {
    let Some((section, name)) = key.split_once('.') else {
        return table
            .get("")
            .and_then(|entries| entries.get(key))
            .cloned()
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
                section: None,
            });
    };

    table
        .get(section)
        .and_then(|entries| entries.get(name))
        .cloned()
        .ok_or_else(|| Error::KeyNotFound {
            key: name.to_string(),
            section: Some(section.to_string()),
        })
}

fn nested(map: &NestedMap, key: &str) -> Result<String> {
    resolve(map, key)
        .map(ToString::to_string)
        .ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
            section: None,
        })
}

fn resolve<'a>(map: &'a NestedMap, key: &str) -> Option<&'a Node> {
    let mut segments = key.split('.');
    let mut node = map.get(segments.next()?)?;
    for segment in segments {
        node = node.as_map()?.get(segment)?;
    }
    Some(node)
}

fn section_keys(table: &SectionTable) -> Vec<String> {
    let mut keys = Vec::new();
    for (section, entries) in table {
        if section.is_empty() {
            keys.extend(entries.keys().filter(|key| !key.contains('.')).cloned());
        } else if !section.contains('.') {
            keys.extend(entries.keys().map(|key| format!("{section}.{key}")));
        }
    }
    keys
}

fn collect_nested_keys(map: &NestedMap, prefix: Option<&str>, out: &mut Vec<String>) {
    for (segment, node) in map {
        if segment.contains('.') {
            continue;
        }
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{segment}"),
            None => segment.clone(),
        };
        match node {
            Node::Map(child) => collect_nested_keys(child, Some(&path), out),
            _ => out.push(path),
        }
    }
}
