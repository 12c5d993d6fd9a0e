/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Absolute positioning of layout lines on a host canvas.
//!
//! The output is plain geometry for a drawing host to materialize; nothing
//! here touches a real document.

use citeline_core::{PositionMode, StyleOptions};
use serde::Serialize;

use super::{LayoutLine, LineRole};

/// Distance from the canvas edge for the corner and edge anchors.
pub const EDGE_MARGIN: f64 = 50.0;

const TEXT_FILL: &str = "#000000";
const BOX_FILL: &str = "#ffffff";
const BOX_STROKE: &str = "#cccccc";

/// Size of the host drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    /// A4 at 96 dpi, in px.
    fn default() -> Self {
        Self {
            width: 793.7,
            height: 1122.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// A positioned text run. `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlacedLine {
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub font_family: &'static str,
    pub fill: &'static str,
    pub text: String,
}

/// The background rectangle behind the block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoxGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Present when `add_box` is set.
    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub background: Option<BoxGeometry>,
    pub lines: Vec<PlacedLine>,
}

/// Top-left anchor of the block for the configured [`PositionMode`].
pub fn anchor(options: &StyleOptions, canvas: Canvas) -> (f64, f64) {
    let Canvas { width, height } = canvas;
    match options.position {
        PositionMode::Center => (width / 2.0, height / 2.0),
        PositionMode::TopLeft => (EDGE_MARGIN, EDGE_MARGIN),
        PositionMode::TopCenter => (width / 2.0, EDGE_MARGIN),
        PositionMode::TopRight => (width - EDGE_MARGIN, EDGE_MARGIN),
        PositionMode::BottomLeft => (EDGE_MARGIN, height - EDGE_MARGIN),
        PositionMode::BottomCenter => (width / 2.0, height - EDGE_MARGIN),
        PositionMode::BottomRight => (width - EDGE_MARGIN, height - EDGE_MARGIN),
        PositionMode::Custom => (options.x, options.y),
    }
}

/// Position `lines` on `canvas`.
pub fn place(lines: &[LayoutLine], options: &StyleOptions, canvas: Canvas) -> Placement {
    let (x, y) = anchor(options, canvas);
    let line_height = options.line_height();
    let family = options.font_family.css_family();

    let background = options.add_box.then(|| {
        let pad = f64::from(options.box_padding);
        BoxGeometry {
            x: x - pad,
            y: y - pad,
            width: f64::from(options.max_width) + 2.0 * pad,
            height: lines.len() as f64 * line_height + 2.0 * pad,
            fill: BOX_FILL,
            stroke: BOX_STROKE,
            stroke_width: 1.0,
        }
    });

    let placed = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let (font_size, font_weight) = match line.role {
                LineRole::Title => (options.font_size.saturating_add(2), FontWeight::Bold),
                _ => (options.font_size, FontWeight::Normal),
            };
            PlacedLine {
                x: x + f64::from(line.indent),
                y: y + line_height * (i + 1) as f64,
                font_size,
                font_weight,
                font_family: family,
                fill: TEXT_FILL,
                text: line.text.clone(),
            }
        })
        .collect();

    Placement {
        background,
        lines: placed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citeline_core::FontFamily;

    fn lines() -> Vec<LayoutLine> {
        vec![
            LayoutLine {
                text: "References".into(),
                role: LineRole::Title,
                indent: 0,
            },
            LayoutLine {
                text: "[1] Smith".into(),
                role: LineRole::ReferenceFirstLine,
                indent: 0,
            },
            LayoutLine {
                text: "continued".into(),
                role: LineRole::ReferenceContinuation,
                indent: 20,
            },
        ]
    }

    #[test]
    fn test_anchor_modes() {
        let canvas = Canvas {
            width: 800.0,
            height: 600.0,
        };
        let at = |position| {
            anchor(
                &StyleOptions {
                    position,
                    ..Default::default()
                },
                canvas,
            )
        };
        assert_eq!(at(PositionMode::Center), (400.0, 300.0));
        assert_eq!(at(PositionMode::TopLeft), (50.0, 50.0));
        assert_eq!(at(PositionMode::TopRight), (750.0, 50.0));
        assert_eq!(at(PositionMode::BottomCenter), (400.0, 550.0));
        assert_eq!(at(PositionMode::BottomRight), (750.0, 550.0));
        assert_eq!(at(PositionMode::Custom), (100.0, 100.0));
    }

    #[test]
    fn test_place_lines_and_box() {
        let options = StyleOptions {
            font_size: 10,
            line_spacing: 1.5,
            font_family: FontFamily::Times,
            ..Default::default()
        };
        let placement = place(&lines(), &options, Canvas::default());

        let bg = placement.background.as_ref().expect("box requested");
        assert_eq!((bg.x, bg.y), (85.0, 85.0));
        assert_eq!(bg.width, 630.0);
        assert_eq!(bg.height, 3.0 * 15.0 + 30.0);

        let title = &placement.lines[0];
        assert_eq!((title.x, title.y), (100.0, 115.0));
        assert_eq!(title.font_size, 12);
        assert_eq!(title.font_weight, FontWeight::Bold);
        assert_eq!(title.font_family, "Times New Roman, serif");

        let cont = &placement.lines[2];
        assert_eq!((cont.x, cont.y), (120.0, 145.0));
        assert_eq!(cont.font_weight, FontWeight::Normal);
    }

    #[test]
    fn test_no_box() {
        let options = StyleOptions {
            add_box: false,
            ..Default::default()
        };
        let placement = place(&lines(), &options, Canvas::default());
        assert!(placement.background.is_none());
        let json = serde_json::to_value(&placement).unwrap();
        assert!(json.get("box").is_none());
    }
}
