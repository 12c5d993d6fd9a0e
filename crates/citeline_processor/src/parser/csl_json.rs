/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! CSL-JSON input.
//!
//! Accepts a single item object or an array of items. Each item is decoded
//! independently so one bad item does not discard its siblings.

use citeline_core::{Entry, Field};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::{ParseOutcome, ReferenceParser};
use crate::error::ProcessorError;

/// Parser for CSL-JSON `.json` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct CslJsonParser;

/// A value CSL-JSON allows as either a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_text(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CslName {
    family: Option<String>,
    given: Option<String>,
    literal: Option<String>,
}

impl CslName {
    fn display(&self) -> Option<String> {
        match (&self.given, &self.family, &self.literal) {
            (Some(given), Some(family), _) => Some(format!("{} {}", given, family)),
            (_, _, Some(literal)) => Some(literal.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Issued {
    Parts {
        #[serde(rename = "date-parts")]
        date_parts: Vec<Vec<StringOrNumber>>,
    },
    Text(String),
    Other(Value),
}

impl Issued {
    fn year(self) -> Option<String> {
        match self {
            Issued::Parts { date_parts } => date_parts
                .into_iter()
                .next()
                .and_then(|parts| parts.into_iter().next())
                .map(StringOrNumber::into_text),
            Issued::Text(s) => Some(s.chars().take(4).collect()),
            Issued::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CslItem {
    id: Option<StringOrNumber>,
    #[serde(rename = "type")]
    item_type: Option<String>,
    #[serde(default)]
    author: Vec<CslName>,
    title: Option<StringOrNumber>,
    container_title: Option<StringOrNumber>,
    publisher: Option<StringOrNumber>,
    volume: Option<StringOrNumber>,
    issue: Option<StringOrNumber>,
    page: Option<StringOrNumber>,
    issued: Option<Issued>,
}

impl CslItem {
    fn into_entry(self) -> Entry {
        let item_type = self
            .item_type
            .unwrap_or_else(|| "article-journal".to_string());
        let entry_type = if item_type.contains("journal") {
            "article".to_string()
        } else {
            item_type
        };

        let mut entry = Entry::new(entry_type, "");

        let authors: Vec<String> = self.author.iter().filter_map(CslName::display).collect();
        if !authors.is_empty() {
            entry.insert(Field::Author, authors.join(" and "));
        }

        let mapped = [
            (Field::Title, self.title),
            (Field::Journal, self.container_title),
            (Field::Publisher, self.publisher),
            (Field::Volume, self.volume),
            (Field::Number, self.issue),
            (Field::Pages, self.page),
        ];
        for (field, value) in mapped {
            if let Some(v) = value {
                entry.insert(field, v.into_text());
            }
        }

        if let Some(year) = self.issued.and_then(Issued::year) {
            entry.insert(Field::Year, year);
        }

        entry.key = match self.id.map(StringOrNumber::into_text) {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => entry.title_key(),
        };
        entry
    }
}

impl ReferenceParser for CslJsonParser {
    fn parse(&self, input: &str) -> Result<ParseOutcome, ProcessorError> {
        let data: Value = serde_json::from_str(input).map_err(|e| {
            error!(error = %e, "CSL-JSON input is not valid JSON");
            ProcessorError::ParseError("CSL-JSON".to_string(), e.to_string())
        })?;

        let items = match data {
            Value::Array(items) => items,
            obj @ Value::Object(_) => vec![obj],
            _ => {
                return Err(ProcessorError::ParseError(
                    "CSL-JSON".to_string(),
                    "expected an object or an array of objects".to_string(),
                ))
            }
        };

        let mut outcome = ParseOutcome::default();
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<CslItem>(item) {
                Ok(item) => outcome.entries.push(item.into_entry()),
                Err(e) => {
                    outcome.skipped += 1;
                    warn!(index, error = %e, "skipping malformed CSL-JSON item");
                }
            }
        }

        debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped,
            "parsed CSL-JSON input"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {
                "id": "kuhn1962",
                "type": "book",
                "author": [{"family": "Kuhn", "given": "Thomas S."}],
                "title": "The Structure of Scientific Revolutions",
                "issued": {"date-parts": [[1962]]},
                "publisher": "University of Chicago Press"
            },
            {
                "id": 42,
                "type": "article-journal",
                "author": [
                    {"family": "Smith", "given": "Jane"},
                    {"literal": "World Bank"}
                ],
                "title": "A Study",
                "container-title": "J. Sci",
                "volume": 5,
                "issue": "2",
                "page": "10-20",
                "issued": "2020-03-01"
            }
        ]"#;
        let outcome = CslJsonParser.parse(json).unwrap();
        assert_eq!(outcome.entries.len(), 2);

        let book = &outcome.entries[0];
        assert_eq!(book.entry_type, "book");
        assert_eq!(book.key, "kuhn1962");
        assert_eq!(book.get(Field::Author), Some("Thomas S. Kuhn"));
        assert_eq!(book.get(Field::Year), Some("1962"));

        let article = &outcome.entries[1];
        assert_eq!(article.entry_type, "article");
        assert_eq!(article.key, "42");
        assert_eq!(article.get(Field::Author), Some("Jane Smith and World Bank"));
        assert_eq!(article.get(Field::Journal), Some("J. Sci"));
        assert_eq!(article.get(Field::Volume), Some("5"));
        assert_eq!(article.get(Field::Number), Some("2"));
        assert_eq!(article.get(Field::Year), Some("2020"));
    }

    #[test]
    fn test_single_object_without_id_or_type() {
        let outcome = CslJsonParser
            .parse(r#"{"title": "Deep Learning for Everyone Everywhere"}"#)
            .unwrap();
        let e = &outcome.entries[0];
        assert_eq!(e.entry_type, "article");
        assert_eq!(e.key, "Deep Learning for Ev");
    }

    #[test]
    fn test_names_without_given_or_literal_are_ignored() {
        let outcome = CslJsonParser
            .parse(r#"{"id": "x", "author": [{"family": "Solo"}]}"#)
            .unwrap();
        assert!(!outcome.entries[0].has(Field::Author));
    }

    #[test]
    fn test_malformed_item_is_skipped() {
        let json = r#"[{"id": "ok", "title": "Fine"}, {"id": "bad", "author": "not a list"}, 7]"#;
        let outcome = CslJsonParser.parse(json).unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.skipped, 2);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = CslJsonParser.parse("{not json").unwrap_err();
        assert!(matches!(err, ProcessorError::ParseError(ref f, _) if f == "CSL-JSON"));
        assert!(CslJsonParser.parse("\"just a string\"").is_err());
    }

    #[test]
    fn test_unrecognized_type_is_kept() {
        let outcome = CslJsonParser
            .parse(r#"{"id": "c", "type": "chapter", "title": "T"}"#)
            .unwrap();
        assert_eq!(outcome.entries[0].entry_type, "chapter");
    }
}
