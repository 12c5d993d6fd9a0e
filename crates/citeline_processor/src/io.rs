/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

use std::fs;
use std::path::Path;

use citeline_core::StyleOptions;

use crate::parser::{self, InputFormat, ParseOutcome};
use crate::ProcessorError;

/// Read a source file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_source(path: &Path) -> Result<String, ProcessorError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Load entries from a reference file, choosing the parser by extension.
pub fn load_entries(path: &Path) -> Result<ParseOutcome, ProcessorError> {
    let format = InputFormat::from_path(path)?;
    let content = read_source(path)?;
    parser::parse(&content, format)
}

/// Load [`StyleOptions`] from a YAML or JSON file.
pub fn load_options(path: &Path) -> Result<StyleOptions, ProcessorError> {
    let content = read_source(path)?;
    Ok(StyleOptions::from_yaml(&content)?)
}
