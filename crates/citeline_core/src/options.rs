/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Rendering options.
//!
//! [`StyleOptions`] is the single configuration value threaded through the
//! pipeline. It deserializes from partial YAML or JSON: missing keys take
//! their defaults and unknown identifiers resolve to each enum's fallback.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::str_enum;

str_enum! {
    /// Citation style used to compose each reference.
    pub enum CitationFormat (fallback = Apa) {
        Apa = "apa",
        Apa7 = "apa7",
        Mla = "mla",
        Chicago = "chicago",
        Harvard = "harvard",
        Ieee = "ieee",
        Vancouver = "vancouver",
        Ama = "ama",
        Acs = "acs",
        Nature = "nature",
    }
}

str_enum! {
    /// Label placed before each reference.
    pub enum NumberingStyle (fallback = Numeric) {
        /// `[1]`
        Numeric = "numeric",
        /// `1.`
        NumericDot = "numeric_dot" | "numeric-dot",
        /// `(1)`
        NumericParen = "numeric_paren" | "numeric-paren",
        Bullet = "bullet",
        Dash = "dash",
        Asterisk = "asterisk",
        /// `*`, `†`, `‡`, ...
        Symbols = "symbols",
        /// `a.` .. `z.`
        Alpha = "alpha",
        /// `i.` .. `xx.`
        Roman = "roman",
        None = "none",
    }
}

str_enum! {
    /// Bibliography ordering.
    pub enum SortOrder (fallback = Appearance) {
        /// Keep file order.
        Appearance = "appearance",
        Author = "author",
        Year = "year",
        Title = "title",
    }
}

str_enum! {
    /// Where the reference block is anchored on the canvas.
    pub enum PositionMode (fallback = Custom) {
        /// Use the explicit `x`/`y` coordinates.
        Custom = "custom",
        Center = "center",
        TopLeft = "top-left",
        TopCenter = "top-center",
        TopRight = "top-right",
        BottomLeft = "bottom-left",
        BottomCenter = "bottom-center",
        BottomRight = "bottom-right",
    }
}

str_enum! {
    /// Font family choices offered to the host canvas.
    pub enum FontFamily (fallback = Serif) {
        Serif = "serif",
        SansSerif = "sans-serif",
        Monospace = "monospace",
        Times = "times",
        Arial = "arial",
        Helvetica = "helvetica",
        Georgia = "georgia",
        Palatino = "palatino",
        Garamond = "garamond",
        Courier = "courier",
        Verdana = "verdana",
        Trebuchet = "trebuchet",
    }
}

impl FontFamily {
    /// The CSS font-family list handed to the renderer.
    pub fn css_family(&self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
            FontFamily::Times => "Times New Roman, serif",
            FontFamily::Arial => "Arial, sans-serif",
            FontFamily::Helvetica => "Helvetica, sans-serif",
            FontFamily::Georgia => "Georgia, serif",
            FontFamily::Palatino => "Palatino Linotype, serif",
            FontFamily::Garamond => "Garamond, serif",
            FontFamily::Courier => "Courier New, monospace",
            FontFamily::Verdana => "Verdana, sans-serif",
            FontFamily::Trebuchet => "Trebuchet MS, sans-serif",
        }
    }
}

str_enum! {
    /// Renderer for the formatted references.
    pub enum Backend (fallback = Native) {
        /// Word-wrapped plain-text lines.
        Native = "native" | "inkscape",
        /// A LaTeX bibliography document.
        Latex = "latex",
    }
}

/// Average glyph width as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;

/// All options that influence parsing order, formatting and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleOptions {
    pub format: CitationFormat,
    pub numbering: NumberingStyle,
    pub sort: SortOrder,
    /// Indent continuation lines of each reference.
    pub hanging_indent: bool,
    /// Continuation-line indent in canvas units.
    pub indent_size: u32,
    /// Width of the reference block in canvas units.
    pub max_width: u32,
    pub font_size: u32,
    /// Line height as a multiple of the font size.
    pub line_spacing: f64,
    pub font_family: FontFamily,
    pub show_title: bool,
    pub title_text: String,
    /// Draw a background rectangle behind the block.
    pub add_box: bool,
    pub box_padding: u32,
    pub position: PositionMode,
    /// Anchor x for [`PositionMode::Custom`].
    pub x: f64,
    /// Anchor y for [`PositionMode::Custom`].
    pub y: f64,
    pub backend: Backend,
    /// Extra `\usepackage` lines for the LaTeX backend.
    pub latex_packages: String,
    pub latex_preamble: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            format: CitationFormat::default(),
            numbering: NumberingStyle::default(),
            sort: SortOrder::default(),
            hanging_indent: true,
            indent_size: 20,
            max_width: 600,
            font_size: 11,
            line_spacing: 1.3,
            font_family: FontFamily::default(),
            show_title: true,
            title_text: "References".to_string(),
            add_box: true,
            box_padding: 15,
            position: PositionMode::default(),
            x: 100.0,
            y: 100.0,
            backend: Backend::default(),
            latex_packages: String::new(),
            latex_preamble: String::new(),
        }
    }
}

impl StyleOptions {
    /// Character budget per line, derived from the width and font metrics.
    pub fn max_chars(&self) -> usize {
        let char_width = f64::from(self.font_size) * CHAR_WIDTH_RATIO;
        if char_width <= 0.0 {
            return self.max_width as usize;
        }
        (f64::from(self.max_width) / char_width).floor() as usize
    }

    pub fn line_height(&self) -> f64 {
        f64::from(self.font_size) * self.line_spacing
    }

    /// Parse options from YAML (or JSON, which is a YAML subset).
    pub fn from_yaml(src: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }
}
