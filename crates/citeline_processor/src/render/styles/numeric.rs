/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! IEEE, Vancouver, AMA, ACS and Nature.
//!
//! These styles are normally paired with a numbering marker; the marker
//! itself is added during layout, not here.

use citeline_core::Field;

use super::join;
use crate::render::CitationParts;

pub fn ieee(p: &CitationParts<'_>) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{},", p.authors));
    }
    parts.push(format!("\"{},\"", p.title));

    if let Some(journal) = p.article_journal() {
        let mut source = journal.to_string();
        if let Some(volume) = p.field(Field::Volume) {
            source.push_str(&format!(", vol. {}", volume));
        }
        if let Some(number) = p.field(Field::Number) {
            source.push_str(&format!(", no. {}", number));
        }
        if let Some(pages) = p.field(Field::Pages) {
            source.push_str(&format!(", pp. {}", pages));
        }
        parts.push(format!("{}, {}.", source, p.year));
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("{}, {}.", publisher, p.year));
    }

    join(parts)
}

pub fn vancouver(p: &CitationParts<'_>) -> String {
    medical(p, true)
}

pub fn ama(p: &CitationParts<'_>) -> String {
    medical(p, false)
}

/// Vancouver and AMA differ only in whether the month follows the year.
/// The month is an extra key set through the library API; parsed entries
/// never carry one.
fn medical(p: &CitationParts<'_>, with_month: bool) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{}.", p.authors));
    }
    parts.push(format!("{}.", p.title));

    if let Some(journal) = p.article_journal() {
        parts.push(format!("{}.", journal));
        if p.has(Field::Year) {
            match p.raw("month").filter(|_| with_month) {
                Some(month) => parts.push(format!("{} {};", p.year, month)),
                None => parts.push(format!("{};", p.year)),
            }
        }
        if let Some(volume) = p.field(Field::Volume) {
            let mut issue = volume.to_string();
            if let Some(number) = p.field(Field::Number) {
                issue.push_str(&format!("({})", number));
            }
            if let Some(pages) = p.field(Field::Pages) {
                issue.push_str(&format!(":{}", pages));
            }
            parts.push(format!("{}.", issue));
        }
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("{}; {}.", publisher, p.year));
    }

    join(parts)
}

pub fn acs(p: &CitationParts<'_>) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{}.", p.authors));
    }
    parts.push(format!("{}.", p.title));

    if let Some(journal) = p.article_journal() {
        let mut source = journal.to_string();
        if p.has(Field::Year) {
            source.push_str(&format!(" {}", p.year));
        }
        if let Some(volume) = p.field(Field::Volume) {
            source.push_str(&format!(", {}", volume));
        }
        if let Some(pages) = p.field(Field::Pages) {
            source.push_str(&format!(", {}", pages));
        }
        parts.push(format!("{}.", source));
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("{}: {}.", publisher, p.year));
    }

    join(parts)
}

pub fn nature(p: &CitationParts<'_>) -> String {
    let mut parts = Vec::new();

    if p.has_authors() {
        parts.push(format!("{}.", p.authors));
    }
    parts.push(format!("{}.", p.title));

    if let Some(journal) = p.article_journal() {
        let mut source = journal.to_string();
        if let Some(volume) = p.field(Field::Volume) {
            source.push_str(&format!(" {},", volume));
        }
        if let Some(pages) = p.field(Field::Pages) {
            source.push_str(&format!(" {}", pages));
        }
        parts.push(format!("{} ({}).", source, p.year));
    } else if let Some(publisher) = p.field(Field::Publisher) {
        parts.push(format!("({}, {}).", publisher, p.year));
    }

    join(parts)
}
