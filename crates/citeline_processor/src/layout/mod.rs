/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Native text layout: numbering, greedy word wrap and hanging indents.
//!
//! Widths are measured in characters (Unicode scalar values), derived from
//! the canvas width by [`StyleOptions::max_chars`]. The resulting
//! [`LayoutLine`]s carry their horizontal offset in canvas units and are
//! positioned on a canvas by [`placement::place`].

pub mod placement;

use citeline_core::StyleOptions;
use serde::Serialize;

use crate::processor::labels::marker;

pub use placement::{place, BoxGeometry, Canvas, PlacedLine, Placement};

/// What a laid-out line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineRole {
    Title,
    ReferenceFirstLine,
    ReferenceContinuation,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutLine {
    pub text: String,
    pub role: LineRole,
    /// Horizontal offset in canvas units.
    pub indent: u32,
}

/// Greedy word wrap.
///
/// A word joins the current line while the line's characters plus one
/// separating space per word still fit. The budget is `max_chars` minus
/// `first_indent` until the first line is emitted, then `max_chars` minus
/// `continuation_indent`. A word longer than the budget is placed alone on
/// its own line rather than split.
pub fn wrap(
    text: &str,
    max_chars: usize,
    first_indent: usize,
    continuation_indent: usize,
) -> Vec<String> {
    let first_max = max_chars.saturating_sub(first_indent);
    let continuation_max = max_chars.saturating_sub(continuation_indent);

    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let budget = if lines.is_empty() {
            first_max
        } else {
            continuation_max
        };

        if current_chars + word_chars + current.len() <= budget {
            current.push(word);
            current_chars += word_chars;
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
            }
            current = vec![word];
            current_chars = word_chars;
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Number and wrap formatted references.
///
/// With a hanging indent, continuation lines are wrapped against a budget
/// shortened by the width of the widest marker (the marker of the last
/// reference) plus a space, and are offset by `indent_size`.
pub fn layout_references(references: &[String], options: &StyleOptions) -> Vec<LayoutLine> {
    let max_chars = options.max_chars();
    let marker_chars = marker(references.len(), options.numbering).chars().count() + 1;

    let mut lines = Vec::new();
    if options.show_title {
        lines.push(LayoutLine {
            text: options.title_text.clone(),
            role: LineRole::Title,
            indent: 0,
        });
    }

    for (i, reference) in references.iter().enumerate() {
        let label = marker(i + 1, options.numbering);
        let (text, continuation_indent) = if label.is_empty() {
            (reference.clone(), 0)
        } else {
            let indent = if options.hanging_indent { marker_chars } else { 0 };
            (format!("{} {}", label, reference), indent)
        };

        for (j, line) in wrap(&text, max_chars, 0, continuation_indent)
            .into_iter()
            .enumerate()
        {
            let (role, indent) = if j == 0 {
                (LineRole::ReferenceFirstLine, 0)
            } else if options.hanging_indent {
                (LineRole::ReferenceContinuation, options.indent_size)
            } else {
                (LineRole::ReferenceContinuation, 0)
            };
            lines.push(LayoutLine {
                text: line,
                role,
                indent,
            });
        }
    }
    lines
}
