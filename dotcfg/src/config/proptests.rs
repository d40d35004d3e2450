//! Property-based tests for lookups.

use super::ParsedConfig;
use crate::format::FileType;
use proptest::prelude::*;

// Key and value alphabets that every format can carry unquoted
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_@:/-]{1,24}"
}

fn entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..12)
        .prop_map(|map| map.into_iter().collect())
}

fn render_conf(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}

fn render_ini(section: &str, entries: &[(String, String)]) -> String {
    format!("[{section}]\n{}", render_conf(entries))
}

fn render_json(section: &str, entries: &[(String, String)]) -> String {
    let inner: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect();
    serde_json::json!({ section: inner }).to_string()
}

fn render_yaml(section: &str, entries: &[(String, String)]) -> String {
    let body: String = entries
        .iter()
        .map(|(key, value)| format!("  {key}: \"{value}\"\n"))
        .collect();
    format!("{section}:\n{body}")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every written flat entry reads back verbatim
    #[test]
    fn conf_values_read_back(entries in entries_strategy()) {
        let config = ParsedConfig::from_bytes(FileType::Conf, render_conf(&entries).as_bytes()).unwrap();
        for (key, value) in &entries {
            prop_assert_eq!(&config.get(key).unwrap(), value);
        }
    }

    // The same section of data resolves identically in every sectioned and nested encoding
    #[test]
    fn encodings_agree(section in key_strategy(), entries in entries_strategy()) {
        let configs = [
            ParsedConfig::from_bytes(FileType::Ini, render_ini(&section, &entries).as_bytes()).unwrap(),
            ParsedConfig::from_bytes(FileType::Json, render_json(&section, &entries).as_bytes()).unwrap(),
            ParsedConfig::from_bytes(FileType::Yaml, render_yaml(&section, &entries).as_bytes()).unwrap(),
        ];
        for config in &configs {
            for (key, value) in &entries {
                let dotted = format!("{section}.{key}");
                prop_assert_eq!(&config.get(&dotted).unwrap(), value);
            }
        }
    }

    // Listed keys always resolve and lookups never change the config
    #[test]
    fn listed_keys_resolve(section in key_strategy(), entries in entries_strategy()) {
        let config = ParsedConfig::from_bytes(FileType::Yaml, render_yaml(&section, &entries).as_bytes()).unwrap();
        let before = config.clone();
        prop_assert_eq!(config.len(), entries.len());
        for key in config.keys() {
            let first = config.get(&key).unwrap();
            prop_assert_eq!(first, config.get(&key).unwrap());
        }
        prop_assert_eq!(before, config);
    }

    // Unknown tags fail regardless of content
    #[test]
    fn unknown_tag_always_rejected(tag in "[a-z]{1,8}", content in ".{0,64}") {
        prop_assume!(tag.parse::<FileType>().is_err());
        let err = ParsedConfig::from_tag(&tag, content.as_bytes()).unwrap_err();
        prop_assert!(err.is_unsupported_format());
    }

    // A missing key is always an error, never a value
    #[test]
    fn missing_keys_error(entries in entries_strategy(), probe in "[A-Z]{1,8}") {
        let config = ParsedConfig::from_bytes(FileType::Conf, render_conf(&entries).as_bytes()).unwrap();
        prop_assert!(config.get(&probe).unwrap_err().is_key_not_found());
    }
}
