/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Input parsers.
//!
//! Each interchange format has its own [`ReferenceParser`]. All of them
//! produce the same [`Entry`] shape, keep only the recognized
//! [`Field`](citeline_core::Field)s, and drop malformed records instead of
//! failing the whole file. Dropped records are counted in
//! [`ParseOutcome::skipped`].

pub mod bibtex;
pub mod csl_json;
pub mod endnote;
pub mod ris;

use std::fmt;
use std::path::Path;

use citeline_core::Entry;

use crate::error::ProcessorError;

pub use bibtex::BibtexParser;
pub use csl_json::CslJsonParser;
pub use endnote::EndnoteParser;
pub use ris::RisParser;

/// Entries recovered from one input, plus how many records were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub entries: Vec<Entry>,
    pub skipped: usize,
}

impl ParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parser for one bibliographic interchange format.
pub trait ReferenceParser {
    /// Parse a whole file.
    ///
    /// Malformed records are skipped and counted. An error is returned only
    /// when the input as a whole cannot be read as this format.
    fn parse(&self, input: &str) -> Result<ParseOutcome, ProcessorError>;
}

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Bibtex,
    Ris,
    CslJson,
    Endnote,
}

impl InputFormat {
    /// Select a format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Result<Self, ProcessorError> {
        match ext.to_ascii_lowercase().as_str() {
            "bib" => Ok(InputFormat::Bibtex),
            "ris" => Ok(InputFormat::Ris),
            "json" => Ok(InputFormat::CslJson),
            "enw" | "endnote" => Ok(InputFormat::Endnote),
            other => Err(ProcessorError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ProcessorError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    pub fn parser(&self) -> Box<dyn ReferenceParser> {
        match self {
            InputFormat::Bibtex => Box::new(BibtexParser),
            InputFormat::Ris => Box::new(RisParser),
            InputFormat::CslJson => Box::new(CslJsonParser),
            InputFormat::Endnote => Box::new(EndnoteParser::default()),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Bibtex => "BibTeX",
            InputFormat::Ris => "RIS",
            InputFormat::CslJson => "CSL-JSON",
            InputFormat::Endnote => "EndNote",
        };
        f.write_str(name)
    }
}

/// Parse `input` with the parser for `format`.
pub fn parse(input: &str, format: InputFormat) -> Result<ParseOutcome, ProcessorError> {
    format.parser().parse(input)
}

/// Accumulates repeatable tagged values (RIS `AU`, EndNote `%A`) into one
/// field, joined with `" and "`.
pub(crate) fn append_author(entry: &mut Entry, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    let joined = match entry.get(citeline_core::Field::Author) {
        Some(existing) => format!("{} and {}", existing, value),
        None => value.to_string(),
    };
    entry.insert(citeline_core::Field::Author, joined);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_extension("bib").unwrap(), InputFormat::Bibtex);
        assert_eq!(InputFormat::from_extension("RIS").unwrap(), InputFormat::Ris);
        assert_eq!(InputFormat::from_extension("json").unwrap(), InputFormat::CslJson);
        assert_eq!(InputFormat::from_extension("enw").unwrap(), InputFormat::Endnote);
        assert_eq!(
            InputFormat::from_extension("endnote").unwrap(),
            InputFormat::Endnote
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = InputFormat::from_path(Path::new("refs.docx")).unwrap_err();
        assert!(matches!(err, ProcessorError::UnsupportedFormat(ref e) if e == ".docx"));
        assert!(InputFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_append_author_joins_with_and() {
        let mut e = Entry::new("article", "k");
        append_author(&mut e, "Jane Smith");
        append_author(&mut e, "  ");
        append_author(&mut e, "John Doe");
        assert_eq!(
            e.get(citeline_core::Field::Author),
            Some("Jane Smith and John Doe")
        );
    }
}
