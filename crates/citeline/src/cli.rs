/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

use std::path::PathBuf;

use citeline_core::{
    Backend, CitationFormat, FontFamily, NumberingStyle, PositionMode, SortOrder, StyleOptions,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Rejects identifiers the options file would silently map to a fallback.
macro_rules! known_id_parser {
    ($fn_name:ident, $ty:ty) => {
        fn $fn_name(s: &str) -> Result<$ty, String> {
            <$ty>::parse_known(s).ok_or_else(|| {
                let known: Vec<&str> = <$ty>::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown value '{}' (expected one of: {})", s, known.join(", "))
            })
        }
    };
}

known_id_parser!(parse_format, CitationFormat);
known_id_parser!(parse_numbering, NumberingStyle);
known_id_parser!(parse_sort, SortOrder);
known_id_parser!(parse_position, PositionMode);
known_id_parser!(parse_font_family, FontFamily);
known_id_parser!(parse_backend, Backend);

#[derive(Parser)]
#[command(author, version, about = "Format reference files as numbered, wrapped citations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format a BibTeX, RIS, CSL-JSON or EndNote file
    Render(RenderArgs),
    /// Print the JSON schema for the options file
    Schema,
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Reference file (.bib, .ris, .json, .enw)
    pub file: PathBuf,

    /// Options file (YAML or JSON); flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    pub output: Output,

    /// Citation style
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<CitationFormat>,

    /// Label before each reference
    #[arg(short, long, value_parser = parse_numbering)]
    pub numbering: Option<NumberingStyle>,

    /// Bibliography order
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOrder>,

    /// Block width in canvas units
    #[arg(long)]
    pub max_width: Option<u32>,

    #[arg(long)]
    pub font_size: Option<u32>,

    #[arg(long, value_parser = parse_font_family)]
    pub font_family: Option<FontFamily>,

    #[arg(long)]
    pub line_spacing: Option<f64>,

    /// Do not indent continuation lines
    #[arg(long)]
    pub no_hanging_indent: bool,

    /// Continuation indent in canvas units
    #[arg(long)]
    pub indent_size: Option<u32>,

    /// Omit the heading line
    #[arg(long)]
    pub no_title: bool,

    #[arg(long)]
    pub title_text: Option<String>,

    /// Omit the background box from JSON output
    #[arg(long)]
    pub no_box: bool,

    #[arg(long, value_parser = parse_position)]
    pub position: Option<PositionMode>,

    /// Canvas width used for placement
    #[arg(long, default_value_t = 793.7)]
    pub canvas_width: f64,

    /// Canvas height used for placement
    #[arg(long, default_value_t = 1122.5)]
    pub canvas_height: f64,

    #[arg(short, long, value_parser = parse_backend)]
    pub backend: Option<Backend>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Output {
    /// Wrapped lines
    Text,
    /// Lines, placement geometry and counts
    Json,
    /// A LaTeX document
    Latex,
}

impl RenderArgs {
    /// Apply explicitly given flags on top of `options`.
    pub fn apply(&self, options: &mut StyleOptions) {
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(numbering) = self.numbering {
            options.numbering = numbering;
        }
        if let Some(sort) = self.sort {
            options.sort = sort;
        }
        if let Some(max_width) = self.max_width {
            options.max_width = max_width;
        }
        if let Some(font_size) = self.font_size {
            options.font_size = font_size;
        }
        if let Some(font_family) = self.font_family {
            options.font_family = font_family;
        }
        if let Some(line_spacing) = self.line_spacing {
            options.line_spacing = line_spacing;
        }
        if self.no_hanging_indent {
            options.hanging_indent = false;
        }
        if let Some(indent_size) = self.indent_size {
            options.indent_size = indent_size;
        }
        if self.no_title {
            options.show_title = false;
        }
        if let Some(title_text) = &self.title_text {
            options.title_text = title_text.clone();
        }
        if self.no_box {
            options.add_box = false;
        }
        if let Some(position) = self.position {
            options.position = position;
        }
        if let Some(backend) = self.backend {
            options.backend = backend;
        }
        if self.output == Output::Latex {
            options.backend = Backend::Latex;
        }
    }
}
