/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Value formatting shared by the style composers.

pub mod contributor;

pub use contributor::{format_authors, split_authors};
