//! Corner-anchored block layout.
//!
//! One orientation-parameterized routine replaces the four mirrored
//! top/bottom/left/right code paths. Metrics come through the [`Measure`]
//! trait so the geometry is testable without a font rasterizer.

use crate::overlay::line::ResolvedLine;

/// The four anchor corners of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Anchored to the top-left corner.
    TopLeft,
    /// Anchored to the top-right corner.
    TopRight,
    /// Anchored to the bottom-left corner.
    BottomLeft,
    /// Anchored to the bottom-right corner.
    BottomRight,
}

impl Corner {
    /// All four corners, in draw order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }
}

/// Text metrics needed for placement.
pub trait Measure {
    /// Line height (ascent + descent) for the base or emphasis font.
    fn line_height(&self, emphasis: bool) -> f32;
    /// Rendered width of `text` in the base or emphasis font.
    fn text_width(&self, text: &str, emphasis: bool) -> f32;
}

/// One line with its computed top-left draw origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine<'a> {
    /// The text to draw.
    pub text: &'a str,
    /// Which font variant to draw it with.
    pub emphasis: bool,
    /// Left edge of the line.
    pub x: f32,
    /// Top edge of the line.
    pub y: f32,
}

/// Place a corner block on a `width` x `height` canvas.
///
/// Top corners stack downward from `offset_y`; bottom corners pre-sum the
/// block height (lines may use different fonts) so the block's bottom edge
/// sits `offset_y` above the canvas bottom. Left corners pin each line's
/// left edge at `offset_x`; right corners right-align each measured line at
/// `width - offset_x`. Each line advances the cursor by its own height plus
/// `line_spacing`.
pub fn place_block<'a, M: Measure>(
    corner: Corner,
    lines: &'a [ResolvedLine],
    metrics: &M,
    width: u32,
    height: u32,
    offset_x: u32,
    offset_y: u32,
    line_spacing: f32,
) -> Vec<PlacedLine<'a>> {
    if lines.is_empty() {
        return Vec::new();
    }

    let heights: Vec<f32> = lines
        .iter()
        .map(|l| metrics.line_height(l.emphasis))
        .collect();

    let mut y = if corner.is_top() {
        offset_y as f32
    } else {
        let block_h: f32 =
            heights.iter().sum::<f32>() + line_spacing * (lines.len() - 1) as f32;
        height as f32 - offset_y as f32 - block_h
    };

    let mut placed = Vec::with_capacity(lines.len());
    for (line, h) in lines.iter().zip(&heights) {
        let x = if corner.is_left() {
            offset_x as f32
        } else {
            width as f32 - offset_x as f32 - metrics.text_width(&line.text, line.emphasis)
        };
        placed.push(PlacedLine {
            text: line.text.as_str(),
            emphasis: line.emphasis,
            x,
            y,
        });
        y += h + line_spacing;
    }
    placed
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/layout.rs"]
mod tests;
