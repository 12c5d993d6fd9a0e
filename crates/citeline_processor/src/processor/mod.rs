/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! The bibliography pipeline.
//!
//! parse → sort → format → (typeset | number → wrap). Each stage reads the
//! same [`StyleOptions`]; nothing is configured through global state.

pub mod labels;
pub mod sorting;

use std::path::Path;

use citeline_core::{Entry, StyleOptions};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::ProcessorError;
use crate::io;
use crate::layout::{layout_references, place, Canvas, LayoutLine, Placement};
use crate::parser::{self, InputFormat, ParseOutcome};
use crate::render::{backend_for, format_entry, TypesetBackend};

use self::sorting::Sorter;

/// The result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedBibliography {
    /// Formatted references in bibliography order, without markers.
    pub references: Vec<String>,
    /// Native layout. Empty when a typesetting backend produced `typeset`.
    pub lines: Vec<LayoutLine>,
    /// Document produced by the configured backend, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typeset: Option<String>,
    /// Malformed input records that were dropped.
    pub skipped: usize,
    pub entry_count: usize,
}

/// Runs the pipeline for one set of options.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    pub options: StyleOptions,
}

impl Processor {
    pub fn new(options: StyleOptions) -> Self {
        Self { options }
    }

    /// Parse `content` as `format` and render it.
    ///
    /// An input that cannot be read as `format` at all is logged and treated
    /// as containing no entries.
    pub fn process(
        &self,
        content: &str,
        format: InputFormat,
    ) -> Result<RenderedBibliography, ProcessorError> {
        let outcome = match parser::parse(content, format) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(%format, error = %e, "input could not be parsed");
                ParseOutcome::default()
            }
        };
        self.render(&outcome)
    }

    /// Read `path`, choosing the parser from its extension, and render it.
    pub fn process_file(&self, path: &Path) -> Result<RenderedBibliography, ProcessorError> {
        let format = InputFormat::from_path(path)?;
        let content = io::read_source(path)?;
        self.process(&content, format)
    }

    /// Render already-parsed entries with the configured backend.
    pub fn render(&self, outcome: &ParseOutcome) -> Result<RenderedBibliography, ProcessorError> {
        let backend = backend_for(self.options.backend);
        self.render_with(outcome, backend.as_deref())
    }

    /// Render already-parsed entries, typesetting with `backend` when given.
    ///
    /// A backend error is logged and the native layout is produced instead.
    pub fn render_with(
        &self,
        outcome: &ParseOutcome,
        backend: Option<&dyn TypesetBackend>,
    ) -> Result<RenderedBibliography, ProcessorError> {
        if outcome.is_empty() {
            return Err(ProcessorError::NoEntries);
        }

        let sorted = Sorter::new(&self.options).sort_entries(outcome.entries.iter().collect());
        debug!(
            entries = sorted.len(),
            skipped = outcome.skipped,
            sort = %self.options.sort,
            "sorted entries"
        );

        let references = self.format_entries(&sorted);

        let typeset = backend.and_then(|backend| {
            match backend.typeset(&references, &self.options) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    warn!(
                        backend = backend.name(),
                        error = %e,
                        "typesetting failed, falling back to native layout"
                    );
                    None
                }
            }
        });

        let lines = match typeset {
            Some(_) => Vec::new(),
            None => layout_references(&references, &self.options),
        };

        Ok(RenderedBibliography {
            entry_count: references.len(),
            references,
            lines,
            typeset,
            skipped: outcome.skipped,
        })
    }

    /// Format each entry with the configured style.
    pub fn format_entries(&self, entries: &[&Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| format_entry(e, self.options.format))
            .collect()
    }

    /// Position the native layout lines of `rendered` on `canvas`.
    pub fn place(&self, rendered: &RenderedBibliography, canvas: Canvas) -> Placement {
        place(&rendered.lines, &self.options, canvas)
    }
}
