/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Pluggable typesetting backends.

use citeline_core::{Backend, StyleOptions};

use super::latex::LatexBackend;
use crate::error::ProcessorError;

/// Renders formatted references into a complete output document.
///
/// Backends run after formatting, in place of the native wrap-and-number
/// layout. A backend error is not fatal for the pipeline: the caller falls
/// back to native layout.
pub trait TypesetBackend {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Build the document for `references`, in bibliography order.
    fn typeset(&self, references: &[String], options: &StyleOptions)
        -> Result<String, ProcessorError>;
}

/// The backend configured by `backend`, or `None` for native layout.
pub fn backend_for(backend: Backend) -> Option<Box<dyn TypesetBackend>> {
    match backend {
        Backend::Native => None,
        Backend::Latex => Some(Box::new(LatexBackend)),
    }
}
