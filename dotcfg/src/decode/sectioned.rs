//! Decoder for INI-style sectioned files.

use ini::{Ini, ParseOption};

use super::{DecodeError, SectionTable};

/// Decodes INI text into a section table.
///
/// Keys that appear before the first section header are stored in the
/// unnamed section `""`. Backslash escapes are not interpreted, so values
/// such as Windows paths are kept as written. A `;` or `#` preceded by
/// whitespace starts an inline comment that is dropped from the value.
///
/// # Errors
///
/// Returns [`DecodeError::Ini`] if the text is not valid INI.
pub fn decode(text: &str) -> Result<SectionTable, DecodeError> {
    let option = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(text, option)?;

    let mut table = SectionTable::new();
    for (section, properties) in ini.iter() {
        let entries = table
            .entry(section.unwrap_or_default().to_string())
            .or_default();
        for (key, value) in properties.iter() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    Ok(table)
}
