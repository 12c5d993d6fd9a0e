/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! citeline processor
//!
//! Parses BibTeX, RIS, CSL-JSON and EndNote reference files, renders each
//! entry in one of the built-in citation styles, then numbers and wraps
//! the result into positioned text lines (or hands it to a typesetting
//! backend such as LaTeX).
//!
//! # Example
//!
//! ```rust
//! use citeline_core::{CitationFormat, StyleOptions};
//! use citeline_processor::{InputFormat, Processor};
//!
//! let bib = r#"
//! @article{smith2020,
//!   author = {Jane Smith},
//!   title = {A Study},
//!   journal = {J. Sci},
//!   year = {2020},
//!   volume = {5},
//!   number = {2},
//!   pages = {10-20}
//! }
//! "#;
//!
//! let processor = Processor::new(StyleOptions {
//!     format: CitationFormat::Ieee,
//!     show_title: false,
//!     ..Default::default()
//! });
//! let result = processor.process(bib, InputFormat::Bibtex).unwrap();
//! assert_eq!(
//!     result.references[0],
//!     "Smith J, \"A Study,\" J. Sci, vol. 5, no. 2, pp. 10-20, 2020."
//! );
//! assert!(result.lines[0].text.starts_with("[1] Smith J"));
//! ```

pub mod error;
pub mod io;
pub mod layout;
pub mod parser;
pub mod processor;
pub mod render;
pub mod values;

pub use error::ProcessorError;
pub use layout::{layout_references, wrap, Canvas, LayoutLine, LineRole, Placement};
pub use parser::{InputFormat, ParseOutcome, ReferenceParser};
pub use processor::labels::marker;
pub use processor::sorting::Sorter;
pub use processor::{Processor, RenderedBibliography};
pub use render::{format_entry, LatexBackend, TypesetBackend};
pub use values::format_authors;
