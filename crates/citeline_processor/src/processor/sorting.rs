/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

use citeline_core::{Entry, Field, SortOrder, StyleOptions};

/// Sort key for entries without a year, placing them last.
const MISSING_YEAR: &str = "9999";

pub struct Sorter<'a> {
    options: &'a StyleOptions,
}

impl<'a> Sorter<'a> {
    pub fn new(options: &'a StyleOptions) -> Self {
        Self { options }
    }

    /// Order entries by the configured [`SortOrder`].
    ///
    /// The sort is stable, so entries with equal keys keep their input order.
    pub fn sort_entries<'b>(&self, entries: Vec<&'b Entry>) -> Vec<&'b Entry> {
        let mut entries = entries;
        match self.options.sort {
            SortOrder::Appearance => {}
            SortOrder::Author => entries.sort_by_cached_key(|e| lowercase_field(e, Field::Author)),
            SortOrder::Title => entries.sort_by_cached_key(|e| lowercase_field(e, Field::Title)),
            SortOrder::Year => {
                entries.sort_by(|a, b| year_key(a).cmp(year_key(b)));
            }
        }
        entries
    }
}

fn lowercase_field(entry: &Entry, field: Field) -> String {
    entry.get(field).unwrap_or_default().to_lowercase()
}

fn year_key(entry: &Entry) -> &str {
    entry.get(Field::Year).unwrap_or(MISSING_YEAR)
}
