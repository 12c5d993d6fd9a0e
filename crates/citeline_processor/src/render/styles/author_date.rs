/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! APA (also APA 7 and Harvard), MLA and Chicago.

use citeline_core::Field;

use super::join;
use crate::render::CitationParts;

pub fn apa(p: &CitationParts<'_>) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{} ({}).", p.authors, p.year));
    } else {
        parts.push(format!("({}).", p.year));
    }
    parts.push(format!("{}.", p.title));

    if p.is_article() {
        if let Some(journal) = p.field(Field::Journal) {
            let mut source = journal.to_string();
            if let Some(volume) = p.field(Field::Volume) {
                source.push_str(&format!(", {}", volume));
            }
            if let Some(number) = p.field(Field::Number) {
                source.push_str(&format!("({})", number));
            }
            if let Some(pages) = p.field(Field::Pages) {
                source.push_str(&format!(", {}", pages));
            }
            parts.push(format!("{}.", source));
        }
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("{}.", publisher));
    }

    join(parts)
}

pub fn mla(p: &CitationParts<'_>) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{}.", p.authors));
    }
    parts.push(format!("\"{}.\"", p.title));

    if let Some(journal) = p.article_journal() {
        parts.push(format!("{},", journal));
        if let Some(volume) = p.field(Field::Volume) {
            parts.push(format!("vol. {},", volume));
        }
        if let Some(number) = p.field(Field::Number) {
            parts.push(format!("no. {},", number));
        }
        parts.push(format!("{},", p.year));
        if let Some(pages) = p.field(Field::Pages) {
            parts.push(format!("pp. {}.", pages));
        }
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("{}, {}.", publisher, p.year));
    }

    join(parts)
}

pub fn chicago(p: &CitationParts<'_>) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{}.", p.authors));
    }
    parts.push(format!("{}. \"{}.\"", p.year, p.title));

    if let Some(journal) = p.article_journal() {
        let mut source = journal.to_string();
        if let Some(volume) = p.field(Field::Volume) {
            source.push_str(&format!(" {}", volume));
        }
        if let Some(number) = p.field(Field::Number) {
            source.push_str(&format!(", no. {}", number));
        }
        if let Some(pages) = p.field(Field::Pages) {
            source.push_str(&format!(": {}", pages));
        }
        parts.push(format!("{}.", source));
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("{}.", publisher));
    }

    join(parts)
}

#[cfg(test)]
mod tests {
    use citeline_core::{entry, CitationFormat, Entry};

    use crate::render::format_entry;

    fn article() -> Entry {
        entry!(
            "article", "smith2020",
            Author = "Jane Smith",
            Title = "A Study",
            Year = "2020",
            Journal = "J. Sci",
            Volume = "5",
            Number = "2",
            Pages = "10-20",
        )
    }

    fn book() -> Entry {
        entry!(
            "book", "doe1999",
            Author = "John Doe and Ann Lee",
            Title = "Collected Essays",
            Year = "1999",
            Publisher = "Academic Press",
        )
    }

    #[test]
    fn test_apa_article() {
        assert_eq!(
            format_entry(&article(), CitationFormat::Apa),
            "Smith, J. (2020). A Study. J. Sci, 5(2), 10-20."
        );
    }

    #[test]
    fn test_apa_book() {
        assert_eq!(
            format_entry(&book(), CitationFormat::Apa),
            "Doe, J. & Lee, A. (1999). Collected Essays. Academic Press."
        );
    }

    #[test]
    fn test_apa_without_author_or_year() {
        let e = entry!("misc", "k", Title = "Anonymous Pamphlet");
        assert_eq!(
            format_entry(&e, CitationFormat::Apa),
            "(n.d.). Anonymous Pamphlet."
        );
    }

    #[test]
    fn test_apa_article_without_journal_has_no_source() {
        let e = entry!("article", "k", Author = "Jane Smith", Title = "T", Year = "2020", Publisher = "P");
        assert_eq!(format_entry(&e, CitationFormat::Apa), "Smith, J. (2020). T.");
    }

    #[test]
    fn test_mla_article() {
        assert_eq!(
            format_entry(&article(), CitationFormat::Mla),
            "Jane Smith. \"A Study.\" J. Sci, vol. 5, no. 2, 2020, pp. 10-20."
        );
    }

    #[test]
    fn test_mla_book() {
        assert_eq!(
            format_entry(&book(), CitationFormat::Mla),
            "John Doe, et al.. \"Collected Essays.\" Academic Press, 1999."
        );
    }

    #[test]
    fn test_mla_article_without_journal_uses_publisher() {
        let e = entry!("article", "k", Title = "T", Publisher = "P");
        assert_eq!(format_entry(&e, CitationFormat::Mla), "\"T.\" P, n.d..");
    }

    #[test]
    fn test_chicago_article() {
        assert_eq!(
            format_entry(&article(), CitationFormat::Chicago),
            "Smith, J.. 2020. \"A Study.\" J. Sci 5, no. 2: 10-20."
        );
    }

    #[test]
    fn test_chicago_book() {
        assert_eq!(
            format_entry(&book(), CitationFormat::Chicago),
            "Doe, J. & Lee, A.. 1999. \"Collected Essays.\" Academic Press."
        );
    }

    #[test]
    fn test_harvard_matches_apa() {
        assert_eq!(
            format_entry(&book(), CitationFormat::Harvard),
            format_entry(&book(), CitationFormat::Apa)
        );
    }
}
