/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

use thiserror::Error;

/// Errors that stop a pipeline stage.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to parse {0} input: {1}")]
    ParseError(String, String),

    #[error("no valid reference entries found")]
    NoEntries,

    #[error("{0} backend failed: {1}")]
    Backend(String, String),

    #[error("invalid options: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ProcessorError {
    fn from(e: serde_yaml::Error) -> Self {
        ProcessorError::Config(e.to_string())
    }
}
