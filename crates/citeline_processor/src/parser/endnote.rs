/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! EndNote tagged (`.enw`) input.
//!
//! Records are separated by blank lines. Each line starts with `%` followed
//! by a one-character tag.

use citeline_core::{Entry, Field};
use regex::Regex;
use tracing::{debug, warn};

use super::{append_author, ParseOutcome, ReferenceParser};
use crate::error::ProcessorError;

/// Parser for EndNote tagged files.
#[derive(Debug, Clone)]
pub struct EndnoteParser {
    record_separator: Regex,
}

impl Default for EndnoteParser {
    fn default() -> Self {
        Self {
            record_separator: Regex::new(r"\n\s*\n").expect("record separator regex is valid"),
        }
    }
}

fn parse_record(record: &str) -> Entry {
    let mut entry = Entry::new("article", "");

    for line in record.lines() {
        let Some(rest) = line.strip_prefix('%') else {
            continue;
        };
        let mut chars = rest.chars();
        let Some(tag) = chars.next() else {
            continue;
        };
        let value = chars.as_str().trim();

        match tag {
            '0' => entry.entry_type = value.to_lowercase(),
            'A' => append_author(&mut entry, value),
            'T' => entry.insert(Field::Title, value),
            'D' => entry.insert(Field::Year, value.chars().take(4).collect::<String>()),
            'J' => entry.insert(Field::Journal, value),
            'V' => entry.insert(Field::Volume, value),
            'N' => entry.insert(Field::Number, value),
            'P' => entry.insert(Field::Pages, value),
            'I' => entry.insert(Field::Publisher, value),
            _ => {}
        }
    }

    entry.key = entry.title_key();
    entry
}

impl ReferenceParser for EndnoteParser {
    fn parse(&self, input: &str) -> Result<ParseOutcome, ProcessorError> {
        let mut outcome = ParseOutcome::default();

        for record in self.record_separator.split(input) {
            if record.trim().is_empty() {
                continue;
            }
            let entry = parse_record(record);
            if entry.fields.is_empty() {
                outcome.skipped += 1;
                warn!("skipping EndNote record without recognized fields");
                continue;
            }
            outcome.entries.push(entry);
        }

        debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped,
            "parsed EndNote input"
        );
        Ok(outcome)
    }
}
