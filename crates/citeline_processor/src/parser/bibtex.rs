/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! BibTeX input.
//!
//! A bounded scanner for `@type{key, name = value, ...}` blocks. Values are
//! `{...}`, `"..."` or a bare token. One level of nested braces is allowed
//! inside a value (`{The {DNA} Study}`); anything deeper, an unterminated
//! block, or a missing key makes the whole entry malformed, and scanning
//! resumes at the next `@`. String macros, `#` concatenation and
//! cross-references are not supported.

use citeline_core::{Entry, Field};
use tracing::{debug, warn};
use winnow::ascii::multispace0;
use winnow::combinator::opt;
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

use super::{ParseOutcome, ReferenceParser};
use crate::error::ProcessorError;

type PResult<T> = winnow::Result<T, ContextError>;

/// Value braces plus one nested level.
const MAX_BRACE_DEPTH: usize = 2;

/// Block types that carry no reference.
const IGNORED_BLOCKS: &[&str] = &["comment", "string", "preamble"];

/// Parser for `.bib` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct BibtexParser;

struct RawEntry<'s> {
    key: &'s str,
    fields: Vec<(&'s str, &'s str)>,
}

fn identifier<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

/// `{...}` with at most one nested brace level. Returns the inner text.
fn braced_value<'s>(input: &mut &'s str) -> PResult<&'s str> {
    let _ = '{'.parse_next(input)?;
    let start = *input;
    let mut depth = 1_usize;
    loop {
        let c: char = any.parse_next(input)?;
        match c {
            '{' => {
                depth += 1;
                if depth > MAX_BRACE_DEPTH {
                    return Err(ContextError::new());
                }
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    let consumed = start.len() - input.len();
    Ok(&start[..consumed - 1])
}

/// `"..."`, which may itself contain one level of `{...}`.
fn quoted_value<'s>(input: &mut &'s str) -> PResult<&'s str> {
    let _ = '"'.parse_next(input)?;
    let start = *input;
    let mut depth = 0_usize;
    loop {
        let c: char = any.parse_next(input)?;
        match c {
            '{' => {
                depth += 1;
                if depth >= MAX_BRACE_DEPTH {
                    return Err(ContextError::new());
                }
            }
            '}' => {
                if depth == 0 {
                    return Err(ContextError::new());
                }
                depth -= 1;
            }
            '"' if depth == 0 => break,
            _ => {}
        }
    }
    let consumed = start.len() - input.len();
    Ok(&start[..consumed - 1])
}

/// Unquoted numbers and words, e.g. `year = 2020`.
fn bare_value<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':' | '/' | '+')
    })
    .parse_next(input)
}

fn field<'s>(input: &mut &'s str) -> PResult<(&'s str, &'s str)> {
    let name = identifier.parse_next(input)?;
    let _ = (multispace0, '=', multispace0).parse_next(input)?;
    let value = if input.starts_with('{') {
        braced_value.parse_next(input)?
    } else if input.starts_with('"') {
        quoted_value.parse_next(input)?
    } else {
        bare_value.parse_next(input)?
    };
    Ok((name, value))
}

/// Everything after `@type`: `{key, fields...}`.
fn entry_body<'s>(input: &mut &'s str) -> PResult<RawEntry<'s>> {
    let _ = (multispace0, '{', multispace0).parse_next(input)?;
    let key = take_till(1.., |c: char| matches!(c, ',' | '{' | '}' | '@')).parse_next(input)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ContextError::new());
    }
    let _ = ','.parse_next(input)?;

    let mut fields = Vec::new();
    loop {
        let _ = take_while(0.., |c: char| c.is_whitespace() || c == ',').parse_next(input)?;
        if opt('}').parse_next(input)?.is_some() {
            break;
        }
        fields.push(field.parse_next(input)?);
    }
    Ok(RawEntry { key, fields })
}

/// Remove one level of `{...}` protection, then collapse whitespace.
fn clean_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0_usize;
    for c in raw.chars() {
        match c {
            '{' => {
                depth += 1;
                if depth > 1 {
                    out.push(c);
                }
            }
            '}' if depth > 0 => {
                if depth > 1 {
                    out.push(c);
                }
                depth -= 1;
            }
            _ => out.push(c),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl RawEntry<'_> {
    fn into_entry(self, entry_type: &str) -> Entry {
        let mut entry = Entry::new(entry_type, self.key);
        for (name, value) in self.fields {
            if let Some(field) = Field::from_name(name) {
                entry.insert(field, clean_value(value));
            }
        }
        entry
    }
}

impl ReferenceParser for BibtexParser {
    fn parse(&self, input: &str) -> Result<ParseOutcome, ProcessorError> {
        let mut outcome = ParseOutcome::default();
        let mut rest = input;

        while let Some(at) = rest.find('@') {
            let after_at = &rest[at + 1..];
            let mut cursor = after_at;

            let Ok(kind) = identifier.parse_next(&mut cursor) else {
                rest = after_at;
                continue;
            };
            let kind = kind.to_lowercase();
            if IGNORED_BLOCKS.contains(&kind.as_str()) {
                rest = cursor;
                continue;
            }

            let body_start = cursor;
            match entry_body.parse_next(&mut cursor) {
                Ok(raw) => {
                    outcome.entries.push(raw.into_entry(&kind));
                    rest = cursor;
                }
                Err(_) => {
                    // Only a `{` after the type makes this an attempted entry.
                    if body_start.trim_start().starts_with('{') {
                        outcome.skipped += 1;
                        warn!(entry_type = %kind, "skipping malformed BibTeX entry");
                    }
                    rest = after_at;
                }
            }
        }

        debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped,
            "parsed BibTeX input"
        );
        Ok(outcome)
    }
}
