//! Decoder for flat `key = value` files.
//!
//! One pair per line. Blank lines and lines starting with `#` are skipped.
//! The value is everything after the first `=`, so values may themselves
//! contain `=` or `#`. Keys and values are trimmed. Lines without `=` are
//! ignored, and a repeated key keeps its last value.

use super::FlatMap;

/// Decodes flat `key = value` text.
#[must_use]
pub fn decode(text: &str) -> FlatMap {
    let mut map = FlatMap::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pairs() {
        let map = decode("key1=value1\nkey2 = value2");
        assert_eq!(map.len(), 2);
        assert_eq!(map["key1"], "value1");
        assert_eq!(map["key2"], "value2");
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let map = decode("\n# comment\n   # indented comment\nkey = value\n\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["key"], "value");
    }

    #[test]
    fn test_value_split_on_first_equals_only() {
        let map = decode("key4 = rAR#vW@='4EV\nurl=postgres://u:p@h/db?sslmode=require");
        assert_eq!(map["key4"], "rAR#vW@='4EV");
        assert_eq!(map["url"], "postgres://u:p@h/db?sslmode=require");
    }

    #[test]
    fn test_lines_without_equals_ignored() {
        let map = decode("just some words\nkey=value");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_key_and_value() {
        let map = decode("empty =\n= orphan");
        assert_eq!(map["empty"], "");
        assert_eq!(map[""], "orphan");
    }

    #[test]
    fn test_crlf_line_endings() {
        let map = decode("a = 1\r\nb = 2\r\n");
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "2");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let map = decode("k = first\nk = second");
        assert_eq!(map["k"], "second");
    }

    #[test]
    fn test_dotted_keys_kept_verbatim() {
        let map = decode("server.port = 80");
        assert_eq!(map["server.port"], "80");
    }
}
