/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! LaTeX bibliography document backend.
//!
//! Produces a standalone `article` document. Compiling it is left to the
//! caller.

use std::fmt::Write;

use citeline_core::StyleOptions;

use super::backend::TypesetBackend;
use crate::error::ProcessorError;
use crate::processor::labels::marker;

/// Packages every generated document loads. The oversized page keeps long
/// bibliographies on a single page.
const DEFAULT_PACKAGES: &str = r"\usepackage[utf8]{inputenc}
\usepackage{geometry}
\geometry{paperwidth=30in, paperheight=30in, margin=0.5in}";

/// Approximate px to pt conversion.
const PX_TO_PT: f64 = 0.75;

/// LaTeX renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexBackend;

/// Escape characters with special meaning in LaTeX text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// The size command closest to a pixel font size.
pub fn font_size_command(px: u32) -> &'static str {
    match px {
        0..=8 => r"\tiny",
        9..=10 => r"\scriptsize",
        11 => r"\footnotesize",
        12 => r"\small",
        13..=14 => r"\normalsize",
        15..=17 => r"\large",
        18..=20 => r"\Large",
        21..=25 => r"\LARGE",
        _ => r"\huge",
    }
}

impl TypesetBackend for LatexBackend {
    fn name(&self) -> &str {
        "latex"
    }

    fn typeset(
        &self,
        references: &[String],
        options: &StyleOptions,
    ) -> Result<String, ProcessorError> {
        if references.is_empty() {
            return Err(ProcessorError::Backend(
                self.name().to_string(),
                "no references to typeset".to_string(),
            ));
        }

        let mut preamble = DEFAULT_PACKAGES.to_string();
        for extra in [&options.latex_packages, &options.latex_preamble] {
            if !extra.trim().is_empty() {
                preamble.push('\n');
                preamble.push_str(extra);
            }
        }

        let mut items = Vec::with_capacity(references.len() + 1);
        if options.show_title {
            items.push(format!(
                r"\noindent{{{}\textbf{{{}}}}}\\[0.5em]",
                font_size_command(options.font_size.saturating_add(2)),
                escape(&options.title_text)
            ));
        }

        let size = font_size_command(options.font_size);
        let gap = options.line_spacing - 1.0;
        for (i, reference) in references.iter().enumerate() {
            let label = marker(i + 1, options.numbering);
            let text = if label.is_empty() {
                reference.clone()
            } else {
                format!("{} {}", label, reference)
            };

            let mut item = String::new();
            if options.hanging_indent {
                let indent_pt = f64::from(options.indent_size) * PX_TO_PT;
                let _ = writeln!(item, r"\hangindent={}pt", indent_pt);
            }
            let _ = write!(item, r"\noindent {} {}\\[{:.2}em]", size, escape(&text), gap);
            items.push(item);
        }

        let mut doc = String::new();
        let _ = writeln!(doc, r"\documentclass{{article}}");
        let _ = writeln!(doc, "{}", preamble);
        let _ = writeln!(doc, r"\pagestyle{{empty}}");
        let _ = writeln!(doc, r"\setlength{{\parindent}}{{0pt}}");
        let _ = writeln!(doc, r"\begin{{document}}");
        let _ = writeln!(doc, "{}", items.join("\n\n"));
        let _ = writeln!(doc, r"\end{{document}}");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citeline_core::NumberingStyle;

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D 100% $5 #1 a_b"), r"R\&D 100\% \$5 \#1 a\_b");
        assert_eq!(escape(r"{x} \ ~ ^"), r"\{x\} \textbackslash{} \textasciitilde{} \textasciicircum{}");
    }

    #[test]
    fn test_font_size_commands() {
        assert_eq!(font_size_command(8), r"\tiny");
        assert_eq!(font_size_command(10), r"\scriptsize");
        assert_eq!(font_size_command(11), r"\footnotesize");
        assert_eq!(font_size_command(13), r"\normalsize");
        assert_eq!(font_size_command(17), r"\large");
        assert_eq!(font_size_command(25), r"\LARGE");
        assert_eq!(font_size_command(26), r"\huge");
    }

    #[test]
    fn test_document_structure() {
        let options = StyleOptions {
            latex_packages: r"\usepackage{times}".to_string(),
            ..Default::default()
        };
        let refs = vec!["Smith, J. (2020). A Study.".to_string()];
        let doc = LatexBackend.typeset(&refs, &options).unwrap();

        assert!(doc.starts_with("\\documentclass{article}\n"));
        assert!(doc.contains(r"\geometry{paperwidth=30in"));
        assert!(doc.contains(r"\usepackage{times}"));
        assert!(doc.contains(r"\noindent{\normalsize\textbf{References}}\\[0.5em]"));
        assert!(doc.contains("\\hangindent=15pt\n\\noindent \\footnotesize [1] Smith, J. (2020). A Study.\\\\[0.30em]"));
        assert!(doc.trim_end().ends_with(r"\end{document}"));
    }

    #[test]
    fn test_without_title_marker_or_hanging_indent() {
        let options = StyleOptions {
            show_title: false,
            hanging_indent: false,
            numbering: NumberingStyle::None,
            ..Default::default()
        };
        let doc = LatexBackend
            .typeset(&["A & B.".to_string()], &options)
            .unwrap();
        assert!(!doc.contains(r"\textbf"));
        assert!(!doc.contains(r"\hangindent"));
        assert!(doc.contains(r"\noindent \footnotesize A \& B.\\"));
    }

    #[test]
    fn test_size_command_is_separated_from_text() {
        for numbering in [NumberingStyle::Alpha, NumberingStyle::Roman] {
            let options = StyleOptions {
                numbering,
                ..Default::default()
            };
            let doc = LatexBackend
                .typeset(&["Smith J. Title.".to_string()], &options)
                .unwrap();
            assert!(!doc.contains(r"\footnotesizea"), "{}", doc);
            assert!(!doc.contains(r"\footnotesizei"), "{}", doc);
            assert!(doc.contains(r"\noindent \footnotesize "), "{}", doc);
        }
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = LatexBackend
            .typeset(&[], &StyleOptions::default())
            .unwrap_err();
        assert!(matches!(err, ProcessorError::Backend(ref name, _) if name == "latex"));
    }
}
