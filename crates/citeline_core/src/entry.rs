/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! The normalized bibliographic record shared by every parser and formatter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields every parser knows how to fill.
///
/// Parsers drop anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Author,
    Title,
    Year,
    Journal,
    Volume,
    Number,
    Pages,
    Publisher,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Author,
        Field::Title,
        Field::Year,
        Field::Journal,
        Field::Volume,
        Field::Number,
        Field::Pages,
        Field::Publisher,
    ];

    /// The lower-case field name used as the key in [`Entry::fields`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Author => "author",
            Field::Title => "title",
            Field::Year => "year",
            Field::Journal => "journal",
            Field::Volume => "volume",
            Field::Number => "number",
            Field::Pages => "pages",
            Field::Publisher => "publisher",
        }
    }

    /// Look up a field by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed reference.
///
/// `fields` maps lower-case field names to trimmed plain-text values. A
/// missing key means the value is unknown; parsers never store empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry kind, e.g. `article` or `book`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Citation key. Non-empty, not necessarily unique.
    pub key: String,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl Entry {
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            key: key.into(),
            fields: IndexMap::new(),
        }
    }

    /// Store a value, trimming it first. Empty values are not stored.
    pub fn insert(&mut self, field: Field, value: impl AsRef<str>) {
        self.insert_raw(field.as_str(), value);
    }

    /// Like [`Entry::insert`], for keys outside the recognized field set.
    ///
    /// Parsers only store recognized fields, so extra keys such as `month`
    /// only reach an entry built through the library API.
    pub fn insert_raw(&mut self, name: &str, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.fields
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.get_raw(field.as_str())
    }

    /// Look up any stored key, recognized or not.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(field.as_str())
    }

    /// Journal articles take the periodical branch of every style.
    pub fn is_article(&self) -> bool {
        self.entry_type == "article"
    }

    /// The fallback key used by formats without explicit citation keys:
    /// the first 20 characters of the title, or `"unknown"`.
    pub fn title_key(&self) -> String {
        self.get(Field::Title)
            .map(|t| t.chars().take(20).collect())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_trims_and_skips_empty() {
        let mut e = Entry::new("book", "k");
        e.insert(Field::Title, "  Padded  ");
        e.insert(Field::Publisher, "   ");
        assert_eq!(e.get(Field::Title), Some("Padded"));
        assert!(!e.has(Field::Publisher));
    }

    #[test]
    fn test_title_key() {
        let e = crate::entry!(
            "book",
            "",
            Title = "The Structure of Scientific Revolutions"
        );
        assert_eq!(e.title_key(), "The Structure of Sci");
        assert_eq!(Entry::new("book", "").title_key(), "unknown");
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(Field::from_name("AUTHOR"), Some(Field::Author));
        assert_eq!(Field::from_name("doi"), None);
    }

    #[test]
    fn test_entry_json_shape() {
        let e = crate::entry!("article", "smith", Year = "2020");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "article");
        assert_eq!(json["fields"]["year"], "2020");
    }
}
