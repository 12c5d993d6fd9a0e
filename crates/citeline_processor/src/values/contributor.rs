/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Author name formatting.
//!
//! Author fields arrive as a single string, e.g. `"Jane Smith and John Doe"`.
//! The string is split into names and each name is rendered for the target
//! [`CitationFormat`].
//!
//! ## Known limitation
//!
//! Commas are treated as name separators, so an inverted name such as
//! `"Smith, Jane"` is read as two authors (`"Smith"` and `"Jane"`). Inputs
//! should use natural order (`"Jane Smith"`) joined with `and` or commas.

use citeline_core::CitationFormat;

/// Maximum names listed by the compact (IEEE, Vancouver, Nature) styles.
const COMPACT_NAME_LIMIT: usize = 6;

/// How a list of names is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameStyle {
    /// `Last, F. M.` joined with `&`.
    Inverted,
    /// First author only, then `et al.`
    FirstEtAl,
    /// `Last FM`, truncated after six names.
    Compact,
    /// Names as written.
    Plain,
}

impl From<CitationFormat> for NameStyle {
    fn from(format: CitationFormat) -> Self {
        match format {
            CitationFormat::Apa
            | CitationFormat::Apa7
            | CitationFormat::Chicago
            | CitationFormat::Harvard => NameStyle::Inverted,
            CitationFormat::Mla => NameStyle::FirstEtAl,
            CitationFormat::Ieee | CitationFormat::Vancouver | CitationFormat::Nature => {
                NameStyle::Compact
            }
            CitationFormat::Ama | CitationFormat::Acs => NameStyle::Plain,
        }
    }
}

/// Split a raw author field into trimmed, non-empty names.
///
/// `" and "` and `,` both separate names.
pub fn split_authors(raw: &str) -> Vec<String> {
    raw.replace(" and ", ", ")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format a raw author field for `format`.
///
/// Returns an empty string when the field holds no names.
pub fn format_authors(raw: &str, format: CitationFormat) -> String {
    let names = split_authors(raw);
    if names.is_empty() {
        return String::new();
    }

    match NameStyle::from(format) {
        NameStyle::Inverted => {
            let names: Vec<String> = names.iter().map(|n| inverted_name(n)).collect();
            join_with_ampersand(&names)
        }
        NameStyle::FirstEtAl => {
            if names.len() > 1 {
                format!("{}, et al.", names[0])
            } else {
                names[0].clone()
            }
        }
        NameStyle::Compact => {
            let listed: Vec<String> = names
                .iter()
                .take(COMPACT_NAME_LIMIT)
                .map(|n| compact_name(n))
                .collect();
            let mut out = listed.join(", ");
            if names.len() > COMPACT_NAME_LIMIT {
                out.push_str(", et al.");
            }
            out
        }
        NameStyle::Plain => names.join(", "),
    }
}

/// Split a name into its last token and the initials of the others.
fn family_and_initials(name: &str) -> Option<(&str, Vec<char>)> {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let (family, given) = parts.split_last()?;
    if given.is_empty() {
        return None;
    }
    let initials = given.iter().filter_map(|p| p.chars().next()).collect();
    Some((family, initials))
}

/// `"Jane Q. Smith"` → `"Smith, J. Q."`
fn inverted_name(name: &str) -> String {
    match family_and_initials(name) {
        Some((family, initials)) => {
            let initials: Vec<String> = initials.iter().map(char::to_string).collect();
            format!("{}, {}.", family, initials.join(". "))
        }
        None => name.to_string(),
    }
}

/// `"Jane Q. Smith"` → `"Smith JQ"`
fn compact_name(name: &str) -> String {
    match family_and_initials(name) {
        Some((family, initials)) => {
            let initials: String = initials.into_iter().collect();
            format!("{} {}", family, initials)
        }
        None => name.to_string(),
    }
}

fn join_with_ampersand(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} & {}", first, second),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
    }
}
