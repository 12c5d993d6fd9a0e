/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Hardcoded style composers.
//!
//! Every composer collects whitespace-free clauses and joins them with a
//! single space. Clauses for missing fields are left out.

pub mod author_date;
pub mod numeric;

/// Join clauses with single spaces.
pub(crate) fn join(parts: Vec<String>) -> String {
    parts.join(" ")
}
