/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! citeline core types
//!
//! The normalized [`Entry`] record produced by every input parser, and the
//! [`StyleOptions`] value that configures sorting, formatting and layout.

pub mod entry;
pub mod macros;
pub mod options;

pub use entry::{Entry, Field};
pub use options::{
    Backend, CitationFormat, FontFamily, NumberingStyle, PositionMode, SortOrder, StyleOptions,
    CHAR_WIDTH_RATIO,
};
