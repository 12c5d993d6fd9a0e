/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! RIS input.
//!
//! Records end with an `ER  -` line. Inside a record every `TAG  - value`
//! line is mapped through a fixed tag table; other tags are ignored.

use citeline_core::{Entry, Field};
use tracing::{debug, warn};

use super::{append_author, ParseOutcome, ReferenceParser};
use crate::error::ProcessorError;

const RECORD_TERMINATOR: &str = "ER  -";
const TAG_SEPARATOR: &str = "  -";

/// Parser for `.ris` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct RisParser;

fn parse_record(record: &str) -> Entry {
    let mut entry = Entry::new("article", "");

    for line in record.lines() {
        let line = line.trim();
        let Some((tag, value)) = line.split_once(TAG_SEPARATOR) else {
            continue;
        };
        let value = value.trim();

        match tag.trim() {
            "TY" => entry.entry_type = value.to_lowercase(),
            "AU" => append_author(&mut entry, value),
            "TI" => entry.insert(Field::Title, value),
            "PY" => entry.insert(Field::Year, value.split('/').next().unwrap_or(value)),
            "JO" | "JF" | "T2" => entry.insert(Field::Journal, value),
            "VL" => entry.insert(Field::Volume, value),
            "IS" => entry.insert(Field::Number, value),
            "SP" => entry.insert(Field::Pages, value),
            "EP" => {
                if let Some(start) = entry.get(Field::Pages) {
                    let range = format!("{}-{}", start, value);
                    entry.insert(Field::Pages, range);
                }
            }
            "PB" => entry.insert(Field::Publisher, value),
            _ => {}
        }
    }

    entry.key = entry.title_key();
    entry
}

impl ReferenceParser for RisParser {
    fn parse(&self, input: &str) -> Result<ParseOutcome, ProcessorError> {
        let mut outcome = ParseOutcome::default();

        for record in input.split(RECORD_TERMINATOR) {
            if record.trim().is_empty() {
                continue;
            }
            let entry = parse_record(record);
            if entry.fields.is_empty() {
                outcome.skipped += 1;
                warn!("skipping RIS record without recognized fields");
                continue;
            }
            outcome.entries.push(entry);
        }

        debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped,
            "parsed RIS input"
        );
        Ok(outcome)
    }
}
