/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Citation string composition and typesetting backends.
//!
//! Each [`CitationFormat`] maps to one composer function through
//! [`composer_for`]. Composers receive the pre-resolved [`CitationParts`]
//! of an entry and return a single plain-text string.

pub mod backend;
pub mod latex;
pub mod styles;

use citeline_core::{CitationFormat, Entry, Field};

use crate::values::format_authors;

pub use backend::{backend_for, TypesetBackend};
pub use latex::LatexBackend;

/// Year shown when an entry has none.
pub const NO_DATE: &str = "n.d.";

/// A function that renders one entry for one style.
pub type Composer = fn(&CitationParts<'_>) -> String;

/// The resolved pieces every composer works from.
#[derive(Debug, Clone)]
pub struct CitationParts<'a> {
    pub entry_type: &'a str,
    /// Authors already formatted for the target style; empty when unknown.
    pub authors: String,
    /// The entry's year, or [`NO_DATE`].
    pub year: &'a str,
    /// The entry's title, or empty.
    pub title: &'a str,
    entry: &'a Entry,
}

impl<'a> CitationParts<'a> {
    pub fn new(entry: &'a Entry, format: CitationFormat) -> Self {
        Self {
            entry_type: &entry.entry_type,
            authors: entry
                .get(Field::Author)
                .map(|raw| format_authors(raw, format))
                .unwrap_or_default(),
            year: entry.get(Field::Year).unwrap_or(NO_DATE),
            title: entry.get(Field::Title).unwrap_or_default(),
            entry,
        }
    }

    pub fn field(&self, field: Field) -> Option<&'a str> {
        self.entry.get(field)
    }

    /// A key outside the recognized set, such as `month`. Only present on
    /// entries built with [`Entry::insert_raw`](citeline_core::Entry::insert_raw).
    pub fn raw(&self, name: &str) -> Option<&'a str> {
        self.entry.get_raw(name)
    }

    pub fn has(&self, field: Field) -> bool {
        self.entry.has(field)
    }

    pub fn is_article(&self) -> bool {
        self.entry.is_article()
    }

    /// The journal name, when this is an article that has one.
    pub fn article_journal(&self) -> Option<&'a str> {
        if self.is_article() {
            self.field(Field::Journal)
        } else {
            None
        }
    }

    pub fn has_authors(&self) -> bool {
        !self.authors.is_empty()
    }
}

/// The composer that renders `format`.
pub fn composer_for(format: CitationFormat) -> Composer {
    use styles::{author_date, numeric};

    match format {
        CitationFormat::Apa | CitationFormat::Apa7 | CitationFormat::Harvard => author_date::apa,
        CitationFormat::Mla => author_date::mla,
        CitationFormat::Chicago => author_date::chicago,
        CitationFormat::Ieee => numeric::ieee,
        CitationFormat::Vancouver => numeric::vancouver,
        CitationFormat::Ama => numeric::ama,
        CitationFormat::Acs => numeric::acs,
        CitationFormat::Nature => numeric::nature,
    }
}

/// Render one entry as a citation string.
///
/// ```
/// use citeline_core::{entry, CitationFormat};
/// use citeline_processor::render::format_entry;
///
/// let e = entry!(
///     "article", "smith2020",
///     Author = "Jane Smith",
///     Title = "A Study",
///     Year = "2020",
///     Journal = "J. Sci",
///     Volume = "5",
///     Number = "2",
///     Pages = "10-20",
/// );
/// assert_eq!(
///     format_entry(&e, CitationFormat::Apa),
///     "Smith, J. (2020). A Study. J. Sci, 5(2), 10-20."
/// );
/// ```
pub fn format_entry(entry: &Entry, format: CitationFormat) -> String {
    let parts = CitationParts::new(entry, format);
    composer_for(format)(&parts)
}
