/*!
 * The locale string table and its asset micro-parser.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::encoding::unescape_legacy;

// A significant line of the language asset: a quoted namespaced key, a
// colon, and a quoted escaped display string. The surrounding script
// syntax of the asset is not parsed at all.
static TRANSLATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""((?:func|room|sysVar)\.[^"]+)"\s*:\s*"([^"]+)""#).unwrap()
});

/// Locale-specific mapping from namespaced symbolic keys
/// (`func.*`, `room.*`, `sysVar.*`) to display strings.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Scrape a fetched language asset line by line. Only lines carrying
    /// the key/value triple are significant; everything else is ignored.
    /// Values are stored with their legacy escaping already undone.
    pub fn parse(asset: &str) -> Self {
        let mut entries = HashMap::new();
        for line in asset.lines() {
            if let Some(caps) = TRANSLATION_LINE.captures(line) {
                entries.insert(caps[1].to_string(), unescape_legacy(&caps[2]));
            }
        }
        Self { entries }
    }

    /// Look up the display string for a composite key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
